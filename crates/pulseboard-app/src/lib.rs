//! Pulseboard demo application.
//!
//! Wires the shell core together: builds the default navigation menu,
//! starts the feed simulator, and drives the layout shell from a small
//! scripted router stand-in while logging the snapshots renderers would
//! consume.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
