use thiserror::Error;

/// Errors produced by the preferences store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the data directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The preferences file exists but does not parse.
    #[error("Corrupt preferences file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
