//! The Disassembler module converts wordvm bytecode into human-readable assembly listings.
//!
//! Each instruction is printed on its own line as `<offset> <NAME> <operand>`, where the operand
//! is only present for instructions that carry inline bytes.

/// Error types for the disassembler module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::disassemble;
pub use error::Error;
pub use interfaces::{DisassemblerArgs, DisassemblerArgsBuilder};
