use crate::core::{
    context::ExecutionContext,
    error::RevertError,
    opcodes::{DUP1, PUSH0, SWAP1},
    word::bytes_to_word,
};

use super::Control;

/// PUSH0-PUSH32 - Push the N bytes following the opcode onto the stack
///
/// Fails with [`RevertError::TruncatedOperand`] when fewer than N bytes follow the opcode.
pub fn push_n(context: &mut ExecutionContext, opcode: u8) -> Result<Control, RevertError> {
    let num_bytes = (opcode - PUSH0) as usize;
    context.stack.require_room(1)?;

    let start = context.program_counter.saturating_add(1);
    let bytes = operand_bytes(&context.bytecode, start, num_bytes).ok_or_else(|| {
        RevertError::TruncatedOperand {
            opcode,
            needed: num_bytes,
            available: context.bytecode.len().saturating_sub(start),
        }
    })?;

    context.stack.push(bytes_to_word(bytes)?)?;
    Ok(Control::Continue)
}

/// DUP1-DUP16 - Duplicate Nth stack item
pub fn dup_n(context: &mut ExecutionContext, opcode: u8) -> Result<Control, RevertError> {
    let index = (opcode - DUP1 + 1) as usize;
    context.stack.dup(index)?;
    Ok(Control::Continue)
}

/// SWAP1-SWAP16 - Exchange 1st and (N+1)th stack items
pub fn swap_n(context: &mut ExecutionContext, opcode: u8) -> Result<Control, RevertError> {
    let index = (opcode - SWAP1 + 1) as usize;
    context.stack.swap(index)?;
    Ok(Control::Continue)
}

/// The `size` bytes starting at `offset`, if all of them lie inside `source`.
fn operand_bytes(source: &[u8], offset: usize, size: usize) -> Option<&[u8]> {
    source.get(offset..offset.checked_add(size)?)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use crate::core::{
        constants::MAX_STACK_SIZE,
        context::ExecutionContext,
        error::RevertError,
        opcodes::{DUP1, DUP2, DUP3, PUSH0, PUSH1, PUSH2, PUSH12, SWAP1, SWAP2},
        vm::handlers::Control,
    };

    use super::{dup_n, operand_bytes, push_n, swap_n};

    fn context_with_stack(bytecode: &[u8], items: &[u64]) -> ExecutionContext {
        let mut context = ExecutionContext::new(bytecode, 64, u64::MAX);
        for item in items {
            context.stack.push(U256::from(*item)).unwrap();
        }
        context
    }

    #[test]
    fn test_push0_pushes_zero() {
        let mut context = context_with_stack(&[PUSH0], &[]);
        assert_eq!(push_n(&mut context, PUSH0), Ok(Control::Continue));
        assert_eq!(context.stack.peek(0).unwrap(), U256::ZERO);
        assert_eq!(context.program_counter, 0);
    }

    #[test]
    fn test_push_reads_big_endian_operand() {
        let mut context = context_with_stack(&[PUSH2, 0x01, 0x02], &[]);
        push_n(&mut context, PUSH2).unwrap();
        assert_eq!(context.stack.peek(0).unwrap(), U256::from(0x0102));
    }

    #[test]
    fn test_push_reads_operand_at_program_counter() {
        let mut context = context_with_stack(&[PUSH1, 0xaa, PUSH1, 0xbb], &[]);
        context.program_counter = 2;
        push_n(&mut context, PUSH1).unwrap();
        assert_eq!(context.stack.peek(0).unwrap(), U256::from(0xbb));
    }

    #[test]
    fn test_push12_truncated_operand_reverts() {
        let mut context = context_with_stack(&[PUSH12, 0xff], &[]);
        assert_eq!(
            push_n(&mut context, PUSH12),
            Err(RevertError::TruncatedOperand { opcode: PUSH12, needed: 12, available: 1 })
        );
        assert!(context.stack.is_empty());
    }

    #[test]
    fn test_push_operand_ending_at_last_byte() {
        let mut context = context_with_stack(&[PUSH0, PUSH2, 0x01, 0x02], &[]);
        context.program_counter = 1;
        push_n(&mut context, PUSH2).unwrap();
        assert_eq!(context.stack.peek(0).unwrap(), U256::from(0x0102));
    }

    #[test]
    fn test_operand_bytes_bounds() {
        assert_eq!(operand_bytes(&[0x01, 0x02], 1, 1), Some(&[0x02][..]));
        assert_eq!(operand_bytes(&[0x01, 0x02], 1, 3), None);
        assert_eq!(operand_bytes(&[0x01], 5, 2), None);
        assert_eq!(operand_bytes(&[0x01], 1, 0), Some(&[][..]));
        assert_eq!(operand_bytes(&[0x01], usize::MAX, 2), None);
    }

    #[test]
    fn test_dup1_at_capacity_overflows() {
        let mut context = context_with_stack(&[DUP1], &[]);
        for _ in 0..MAX_STACK_SIZE {
            context.stack.push(U256::ZERO).unwrap();
        }
        assert_eq!(dup_n(&mut context, DUP1), Err(RevertError::StackOverflow));
        assert_eq!(context.stack.size(), MAX_STACK_SIZE);
    }

    #[test]
    fn test_dup2() {
        let mut context = context_with_stack(&[DUP2], &[10, 20]);
        dup_n(&mut context, DUP2).unwrap();
        assert_eq!(context.stack.peek_n(3), vec![U256::from(10), U256::from(20), U256::from(10)]);
    }

    #[test]
    fn test_dup3_underflow_leaves_stack_untouched() {
        let mut context = context_with_stack(&[DUP3], &[10, 20]);
        assert_eq!(dup_n(&mut context, DUP3), Err(RevertError::StackUnderflow));
        assert_eq!(context.stack.size(), 2);
    }

    #[test]
    fn test_swap1() {
        let mut context = context_with_stack(&[SWAP1], &[1, 2]);
        swap_n(&mut context, SWAP1).unwrap();
        assert_eq!(context.stack.peek_n(2), vec![U256::from(1), U256::from(2)]);
    }

    #[test]
    fn test_swap2_underflow() {
        let mut context = context_with_stack(&[SWAP2], &[1, 2]);
        assert_eq!(swap_n(&mut context, SWAP2), Err(RevertError::StackUnderflow));
        assert_eq!(context.stack.peek_n(2), vec![U256::from(2), U256::from(1)]);
    }
}
