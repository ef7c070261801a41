/// Error type for the common module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic error with a message
    #[error("Error: {0}")]
    Generic(String),

    /// An error reading from or writing to the filesystem
    #[error("Filesystem error: {0}")]
    FilesystemError(#[from] std::io::Error),

    /// An error that occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
