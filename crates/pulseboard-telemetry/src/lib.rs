//! Structured logging for pulseboard.
//!
//! JSON output in production, pretty output in development, filtered by
//! `RUST_LOG` with a sensible default.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
