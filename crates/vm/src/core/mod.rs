/// Constants used throughout the VM implementation
pub mod constants;

/// Execution context threaded through every opcode handler
pub mod context;

/// The revert taxonomy shared by all opcode handlers
pub mod error;

/// Memory implementation for VM memory management
pub mod memory;

/// Opcode definitions and metadata
pub mod opcodes;

/// Stack implementation for the VM
pub mod stack;

/// Core virtual machine implementation
pub mod vm;

/// Conversions between byte sequences and 256-bit words
pub mod word;
