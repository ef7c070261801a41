use alloy::primitives::U256;
use wordvm_common::utils::strings::decode_hex;
use wordvm_tracing::init_test_tracing;
use wordvm_vm::core::{
    constants::MAX_STACK_SIZE,
    error::RevertError,
    opcodes,
    vm::{ExecutionResult, ExitStatus, Interpreter},
};

fn run(bytecode: &str) -> ExecutionResult {
    init_test_tracing();
    let bytecode = decode_hex(bytecode).expect("invalid bytecode");
    Interpreter::new(&bytecode, 1024, u64::MAX).execute()
}

fn words(values: &[u64]) -> Vec<U256> {
    values.iter().map(|value| U256::from(*value)).collect()
}

#[test]
fn test_push0_pushes_zero() {
    let result = run("5f");
    assert!(result.is_success());
    assert_eq!(result.stack, words(&[0]));
}

#[test]
fn test_push1_pushes_operand() {
    let result = run("60ff");
    assert_eq!(result.stack, words(&[255]));
    assert_eq!(result.instruction, 2);
}

#[test]
fn test_push32_reads_full_word() {
    let result = run(&format!("7f{}", "ff".repeat(32)));
    assert_eq!(result.stack, vec![U256::MAX]);
}

#[test]
fn test_push_operand_past_end_reverts() {
    let result = run("5f62abcd");
    assert_eq!(
        result.status,
        ExitStatus::Reverted {
            error: RevertError::TruncatedOperand { opcode: opcodes::PUSH3, needed: 3, available: 2 },
            opcode: opcodes::PUSH3,
            instruction: 1,
        }
    );
    assert_eq!(result.stack, words(&[0]));
    assert_eq!(result.instruction, 1);
    assert_eq!(
        result.status.to_string(),
        "[PUSH3]: Revert due to TruncatedOperand (0x62 needs 3 bytes, 2 available) at 0x1."
    );
}

#[test]
fn test_push_with_missing_operand_reverts() {
    let result = run("60");
    assert_eq!(
        result.error(),
        Some(&RevertError::TruncatedOperand { opcode: opcodes::PUSH1, needed: 1, available: 0 })
    );
    assert!(result.stack.is_empty());

    let result = run("7f01");
    assert_eq!(
        result.error(),
        Some(&RevertError::TruncatedOperand { opcode: opcodes::PUSH32, needed: 32, available: 1 })
    );
    assert_eq!(result.instruction, 0);
}

#[test]
fn test_store_then_load_roundtrip() {
    // PUSH1 0x2a PUSH1 0x00 MSTORE PUSH1 0x00 MLOAD
    let result = run("602a600052600051");
    assert!(result.is_success());
    assert_eq!(result.stack, words(&[42]));
    assert_eq!(result.memory.read(31, 1).unwrap(), &[0x2a]);
}

#[test]
fn test_store_at_unaligned_offset() {
    // PUSH2 0xbeef PUSH1 0x05 MSTORE PUSH1 0x05 MLOAD
    let result = run("61beef600552600551");
    assert_eq!(result.stack, words(&[0xbeef]));
    assert_eq!(result.memory.read(35, 2).unwrap(), &[0xbe, 0xef]);
}

#[test]
fn test_load_past_capacity_reverts() {
    // PUSH2 0x03f0 MLOAD, with 1024 bytes of memory
    let result = run("6103f051");
    assert_eq!(
        result.status,
        ExitStatus::Reverted {
            error: RevertError::MemoryOutOfBounds { offset: U256::from(0x3f0), size: 32 },
            opcode: opcodes::MLOAD,
            instruction: 3,
        }
    );
    assert_eq!(result.stack, words(&[0x3f0]));
}

#[test]
fn test_jump_lands_on_jumpdest() {
    // PUSH1 0x04 JUMP INVALID JUMPDEST PUSH1 0x07
    let result = run("600456fe5b6007");
    assert!(result.is_success());
    assert_eq!(result.stack, words(&[7]));
    assert_eq!(result.steps, 4);
}

#[test]
fn test_jump_to_non_jumpdest_reverts() {
    // PUSH1 0x03 JUMP PUSH0
    let result = run("6003565f");
    assert_eq!(
        result.status,
        ExitStatus::Reverted {
            error: RevertError::InvalidJump(U256::from(3)),
            opcode: opcodes::JUMP,
            instruction: 2,
        }
    );
    assert_eq!(result.stack, words(&[3]));
}

#[test]
fn test_jump_out_of_range_reverts() {
    let result = run("60ff56");
    assert_eq!(result.error(), Some(&RevertError::InvalidJump(U256::from(0xff))));
}

#[test]
fn test_jump_into_push_operand_reverts() {
    // PUSH1 0x03 JUMP PUSH1 0x5b
    let result = run("600356605b");
    assert_eq!(result.error(), Some(&RevertError::InvalidJump(U256::from(3))));
}

#[test]
fn test_swap_twice_is_identity() {
    let once = run("600a601490");
    assert_eq!(once.stack, words(&[10, 20]));

    let twice = run("600a60149090");
    assert_eq!(twice.stack, words(&[20, 10]));
}

#[test]
fn test_dup2_copies_second_item() {
    // PUSH1 0x0a PUSH1 0x14 DUP2
    let result = run("600a601481");
    assert_eq!(result.stack, words(&[10, 20, 10]));
}

#[test]
fn test_dup_on_shallow_stack_reverts() {
    let result = run("5f82");
    assert_eq!(result.error(), Some(&RevertError::StackUnderflow));
    assert_eq!(result.stack, words(&[0]));
}

#[test]
fn test_shl() {
    // PUSH1 0x01 PUSH1 0x04 SHL
    let result = run("600160041b");
    assert_eq!(result.stack, words(&[16]));

    // shifting by 256 or more clears the word
    let result = run("60016101001b");
    assert_eq!(result.stack, words(&[0]));
}

#[test]
fn test_stack_overflow_at_capacity() {
    let result = run(&"5f".repeat(MAX_STACK_SIZE + 1));
    assert_eq!(
        result.status,
        ExitStatus::Reverted {
            error: RevertError::StackOverflow,
            opcode: opcodes::PUSH0,
            instruction: MAX_STACK_SIZE,
        }
    );
    assert_eq!(result.stack.len(), MAX_STACK_SIZE);
    assert_eq!(result.steps, MAX_STACK_SIZE as u64);
}

#[test]
fn test_dup_at_capacity_overflows() {
    let result = run(&format!("{}80", "5f".repeat(MAX_STACK_SIZE)));
    assert_eq!(
        result.status,
        ExitStatus::Reverted {
            error: RevertError::StackOverflow,
            opcode: opcodes::DUP1,
            instruction: MAX_STACK_SIZE,
        }
    );
    assert_eq!(result.stack.len(), MAX_STACK_SIZE);
}

#[test]
fn test_unknown_opcode_halts_with_context() {
    let result = run("5ffe5f");
    assert_eq!(
        result.status,
        ExitStatus::Reverted {
            error: RevertError::UnknownOpcode(0xfe),
            opcode: 0xfe,
            instruction: 1,
        }
    );
    assert_eq!(result.status.to_string(), "Unrecognized opcode: 0xfe at 0x1");
}

#[test]
fn test_underflow_message_names_opcode() {
    let result = run("52");
    assert_eq!(result.status.to_string(), "[MSTORE]: Revert due to StackUnderflow at 0x0.");
}

#[test]
fn test_gas_metering() {
    init_test_tracing();
    let bytecode = decode_hex("602a600052").expect("invalid bytecode");

    let result = Interpreter::new(&bytecode, 1024, 9).execute();
    assert!(result.is_success());
    assert_eq!(result.gas_used, 9);
    assert_eq!(result.gas_remaining, 0);

    let result = Interpreter::new(&bytecode, 1024, 8).execute();
    assert_eq!(result.error(), Some(&RevertError::GasExceeded));
    assert_eq!(result.gas_used, 6);
    assert_eq!(result.instruction, 4);
    assert!(result.memory.read(0, 32).unwrap().iter().all(|byte| *byte == 0));
}

#[test]
fn test_interpreter_is_reusable() {
    init_test_tracing();
    let mut vm = Interpreter::new(&decode_hex("602a").unwrap(), 1024, u64::MAX);
    assert_eq!(vm.execute().stack, words(&[42]));

    vm.load_bytecode(&decode_hex("6007").unwrap());
    assert_eq!(vm.execute().stack, words(&[7]));

    vm.reset();
    assert_eq!(vm.execute().stack, words(&[7]));
}

#[test]
fn test_stepping_matches_execute() {
    init_test_tracing();
    let bytecode = decode_hex("600456fe5b6007").unwrap();
    let mut vm = Interpreter::new(&bytecode, 1024, u64::MAX);

    let mut visited = Vec::new();
    while let Some(state) = vm.step().expect("step failed") {
        visited.push(state.last_instruction.instruction);
    }

    assert_eq!(visited, vec![0, 2, 4, 5]);
    assert_eq!(vm.context.stack.peek(0).unwrap(), U256::from(7));
}
