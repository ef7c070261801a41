//! Virtual Machine implementation for bytecode execution.
//!
//! This module provides the interpreter and its dispatch loop, organized into submodules for
//! better maintainability.

mod core;
mod execution;

/// Opcode handlers organized by category.
pub mod handlers;

pub use self::core::Interpreter;
pub use execution::{ExecutionResult, ExitStatus, Instruction, State};
