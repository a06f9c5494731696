/// Error types for OOXML writer operations.
use thiserror::Error;

/// Result type for OOXML writer operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML writer operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Invalid paragraph configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

