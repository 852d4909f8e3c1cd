#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The bytes could not be parsed as a supported archive container.
    #[error("archive format error: {0}")]
    Format(#[from] zip::result::ZipError),

    /// The requested path does not exist in the loaded archive.
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive exceeds the caller-provided byte ceiling.
    #[error("archive size {size} exceeds limit {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
