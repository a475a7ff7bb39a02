use thiserror::Error;

use crate::animal::ValidationError;
use crate::store::StoreError;

/// Error type for registry operations, as seen by a caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The candidate animal failed validation.
    #[error("the animal is not properly formatted: {0}")]
    Validation(#[from] ValidationError),
    /// The request body could not be read as JSON.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    /// No animal with this id.
    #[error("animal not found: {0}")]
    NotFound(String),
    /// The durable store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// The in-memory list lock was poisoned by a panicking writer.
    #[error("animal list lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl ApiError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::MalformedBody(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Store(_) => 500,
            ApiError::LockPoisoned(_) => 500,
        }
    }
}
