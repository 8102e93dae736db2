//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] pulseboard_core::CoreError),

    #[error("Feed error: {0}")]
    Feed(#[from] pulseboard_feed::FeedError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] pulseboard_telemetry::TelemetryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
