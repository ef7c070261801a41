use std::fmt::Display;

use alloy::primitives::U256;

use super::super::{error::RevertError, memory::Memory, opcodes::opcode_name, stack::Stack};

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The program counter ran off the end of the bytecode.
    Normal,

    /// A step failed and the run halted.
    Reverted {
        /// The failure raised by the handler or the dispatch loop.
        error: RevertError,
        /// The opcode being executed when the failure occurred.
        opcode: u8,
        /// The program counter of that opcode.
        instruction: usize,
    },
}

impl Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitStatus::Normal => write!(f, "halted normally"),
            ExitStatus::Reverted { error: RevertError::UnknownOpcode(opcode), instruction, .. } => {
                write!(f, "Unrecognized opcode: {opcode:#x} at {instruction:#x}")
            }
            ExitStatus::Reverted { error, opcode, instruction } => write!(
                f,
                "[{}]: Revert due to {error} at {instruction:#x}.",
                opcode_name(*opcode)
            ),
        }
    }
}

/// [`ExecutionResult`] is the result of a complete run.
#[derive(Clone, Debug)]
pub struct ExecutionResult {
    /// The terminal status of the run.
    pub status: ExitStatus,

    /// The final stack, top first.
    pub stack: Vec<U256>,

    /// The final memory contents.
    pub memory: Memory,

    /// The amount of gas consumed during the execution.
    pub gas_used: u64,

    /// The amount of gas left after execution completes.
    pub gas_remaining: u64,

    /// The final program counter value after execution.
    pub instruction: usize,

    /// The number of steps that completed successfully.
    pub steps: u64,
}

impl ExecutionResult {
    /// Whether the run reached the end of its bytecode.
    pub fn is_success(&self) -> bool {
        self.status == ExitStatus::Normal
    }

    /// The word left on top of the stack, if any.
    pub fn top(&self) -> Option<U256> {
        self.stack.first().copied()
    }

    /// The failure that halted the run, if any.
    pub fn error(&self) -> Option<&RevertError> {
        match &self.status {
            ExitStatus::Normal => None,
            ExitStatus::Reverted { error, .. } => Some(error),
        }
    }
}

/// [`State`] is the state of the VM after executing a single instruction. It is returned by the
/// [`Interpreter::step`] function, and is used for tracing execution.
///
/// [`Interpreter::step`]: super::Interpreter::step
#[derive(Clone, Debug)]
pub struct State {
    /// The instruction that was just executed.
    pub last_instruction: Instruction,

    /// The total amount of gas used so far during execution.
    pub gas_used: u64,

    /// The amount of gas remaining for execution.
    pub gas_remaining: u64,

    /// The current state of the stack.
    pub stack: Stack,
}

/// [`Instruction`] is a single executed instruction, with the stack values it consumed and
/// produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The position of this instruction in the bytecode.
    pub instruction: usize,

    /// The opcode value of the instruction.
    pub opcode: u8,

    /// The top stack values before the instruction ran, as many as the opcode reads.
    pub inputs: Vec<U256>,

    /// The top stack values after the instruction ran, as many as the opcode leaves behind.
    pub outputs: Vec<U256>,
}
