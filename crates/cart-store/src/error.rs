//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when using a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store.
    #[error("Failed to open store at {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the store to its backing medium.
    #[error("Store write failed: {0}")]
    Write(#[source] std::io::Error),

    /// Store refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
