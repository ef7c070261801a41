use alloy::primitives::U256;

/// Reasons a run can halt before reaching the end of its bytecode.
///
/// Every opcode handler reports failure through this type, and the interpreter loop adds
/// [`RevertError::UnknownOpcode`] when the fetched byte has no registered handler. Handlers validate
/// before they mutate, so a failed step leaves the [`ExecutionContext`] exactly as it was.
///
/// [`ExecutionContext`]: crate::core::context::ExecutionContext
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RevertError {
    /// A push would grow the stack past its maximum size.
    #[error("StackOverflow")]
    StackOverflow,

    /// A pop or peek needed more items than the stack holds.
    #[error("StackUnderflow")]
    StackUnderflow,

    /// The step's gas cost exceeds the remaining gas.
    #[error("GasExceeded")]
    GasExceeded,

    /// A memory access falls outside the fixed memory capacity.
    #[error("MemoryOutOfBounds (offset {offset:#x}, size {size})")]
    MemoryOutOfBounds {
        /// The requested start offset.
        offset: U256,
        /// The number of bytes requested.
        size: usize,
    },

    /// The jump target is not a `JUMPDEST` inside the bytecode.
    #[error("InvalidJump (target {0:#x})")]
    InvalidJump(U256),

    /// A byte sequence longer than a word was converted into a word.
    #[error("InvalidWordLength ({0} bytes)")]
    InvalidWordLength(usize),

    /// A push literal runs past the end of the bytecode.
    #[error("TruncatedOperand ({opcode:#04x} needs {needed} bytes, {available} available)")]
    TruncatedOperand {
        /// The push opcode.
        opcode: u8,
        /// The operand width the opcode declares.
        needed: usize,
        /// The bytes left after the opcode.
        available: usize,
    },

    /// The fetched byte has no registered handler.
    #[error("UnknownOpcode ({0:#04x})")]
    UnknownOpcode(u8),
}
