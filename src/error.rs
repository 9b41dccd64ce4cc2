use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Compressed stream errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Structural violations found while parsing a compressed stream.
///
/// Every variant carries the byte position in the compressed input where
/// the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("literal length out of bounds: {length} bytes at position {position}, {available} remain")]
    LiteralOutOfBounds { position: usize, length: usize, available: usize },

    #[error("truncated offset at position {position}")]
    TruncatedOffset { position: usize },

    #[error("invalid offset {offset} at position {position} (output holds {available} bytes)")]
    InvalidOffset { position: usize, offset: u16, available: usize },

    #[error("truncated length extension at position {position}")]
    TruncatedLength { position: usize },
}

impl Error {
    /// Whether this error describes a malformed compressed stream
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
