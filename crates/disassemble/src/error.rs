/// Error type for the Disassembler module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target could not be resolved to bytecode
    #[error("Bytecode error: {0}")]
    BytecodeError(#[from] wordvm_common::Error),

    /// Generic internal error that may occur during disassembly
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
