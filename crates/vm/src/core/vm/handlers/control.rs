use alloy::primitives::U256;

use crate::core::{context::ExecutionContext, error::RevertError, opcodes};

use super::Control;

/// JUMP - Alter the program counter
///
/// The program counter lands on the `JUMPDEST` itself, which then executes as a no-op.
pub fn jump(context: &mut ExecutionContext) -> Result<Control, RevertError> {
    let target = context.stack.peek(0)?;
    let destination = jump_destination(&context.bytecode, target)?;

    context.stack.pop()?;
    context.program_counter = destination;
    Ok(Control::Jump)
}

/// JUMPDEST - Mark a valid destination for jumps (no-op)
pub fn jumpdest() -> Result<Control, RevertError> {
    Ok(Control::Continue)
}

/// Validates that `target` points at a `JUMPDEST` byte inside `bytecode`.
fn jump_destination(bytecode: &[u8], target: U256) -> Result<usize, RevertError> {
    let destination: usize = target.try_into().map_err(|_| RevertError::InvalidJump(target))?;

    match bytecode.get(destination) {
        Some(&opcodes::JUMPDEST) => Ok(destination),
        _ => Err(RevertError::InvalidJump(target)),
    }
}
