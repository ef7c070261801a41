//! Opcode handlers organized by category.
//!
//! Every handler receives the [`ExecutionContext`] mutably, validates all of its preconditions
//! first, and only then mutates the context. On failure the context is left untouched.
//!
//! [`ExecutionContext`]: crate::core::context::ExecutionContext

/// Bitwise operations: SHL
pub mod bitwise;

/// Control flow: JUMP, JUMPDEST
pub mod control;

/// Memory operations: MLOAD, MSTORE
pub mod memory;

/// Stack operations: PUSH0-PUSH32, DUP1-DUP16, SWAP1-SWAP16
pub mod stack;

/// What the dispatch loop should do with the program counter after a handler succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Advance past the opcode and its inline operands.
    Continue,

    /// The handler already set the program counter; leave it alone.
    Jump,
}
