//! Common utilities, constants, and resources used across the wordvm codebase.
//!
//! This crate provides shared functionality for the wordvm toolkit, including bytecode loading
//! and general utility functions.

/// Loading bytecode from hex strings and files.
pub mod bytecode;

/// Constants used throughout the wordvm codebase.
pub mod constants;

/// Error types for the common module
pub mod error;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;
