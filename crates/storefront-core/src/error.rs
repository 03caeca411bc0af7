//! Cart error types.

use thiserror::Error;

/// Result alias for cart storage operations
pub type CartResult<T> = Result<T, CartError>;

/// Errors raised while reading or persisting the cart.
///
/// None of these reach the shopper; the store logs them and falls back to
/// an empty or in-memory cart.
#[derive(Error, Debug)]
pub enum CartError {
    /// No storage backend is reachable (private mode, disabled storage).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The stored value could not be read or has the wrong shape.
    #[error("Read error: {0}")]
    Read(String),

    /// The backend refused the write (quota, permissions).
    #[error("Write error: {0}")]
    Write(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
