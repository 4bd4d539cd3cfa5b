use thiserror::Error;

/// Errors surfaced by durable storage.
///
/// Item list operations never fail and preference decoding falls back to the
/// default, so storage writes are the only source of errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// For [`KeyValueStorage`](crate::KeyValueStorage) implementations whose
    /// failures are neither IO nor JSON.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for Results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
