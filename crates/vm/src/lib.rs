//! wordvm virtual machine implementation
//!
//! This crate provides a deterministic, single-threaded interpreter for a stack machine operating
//! on 256-bit words, with a bounded operand stack, fixed-capacity linear memory and explicit jump
//! destinations.

/// Core VM implementation, including the word adapter, memory, stack, opcodes and interpreter
pub mod core;
