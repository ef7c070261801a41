#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] wordvm_config::error::Error),
    #[error("Bytecode error: {0}")]
    BytecodeError(#[from] wordvm_common::Error),
    #[error("Disassemble error: {0}")]
    DisassembleError(#[from] wordvm_disassembler::Error),
}
