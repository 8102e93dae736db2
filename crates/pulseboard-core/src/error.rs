//! Error types for pulseboard-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Duplicate nav path among siblings: {0}")]
    DuplicateNavPath(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
