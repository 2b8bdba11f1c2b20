/// Core error types for Cast Player
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cast Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog content is well-formed JSON but not an episode list
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid catalog error
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }
}
