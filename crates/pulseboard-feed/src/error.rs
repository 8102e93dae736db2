//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid feed configuration: {0}")]
    InvalidConfig(String),

    #[error("Simulator is already running")]
    AlreadyRunning,
}

pub type FeedResult<T> = Result<T, FeedError>;
