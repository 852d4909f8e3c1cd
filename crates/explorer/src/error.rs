use std::fmt;

use archive::ArchiveError;

/// Unified error type for the explorer crate.
#[derive(Debug)]
pub enum ExplorerError {
    /// No archive is currently loaded.
    NoArchive,
    /// An error from the archive engine.
    Archive(ArchiveError),
    /// Invalid input provided by the caller.
    InvalidInput(String),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::NoArchive => write!(f, "no archive loaded"),
            ExplorerError::Archive(error) => write!(f, "archive error: {error}"),
            ExplorerError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExplorerError::Archive(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ArchiveError> for ExplorerError {
    fn from(error: ArchiveError) -> Self {
        ExplorerError::Archive(error)
    }
}

/// Result type alias using [`ExplorerError`].
pub type ExplorerResult<T> = Result<T, ExplorerError>;
