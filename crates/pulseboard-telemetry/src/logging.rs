//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "info,pulseboard=debug";

/// Initialize structured logging with the default filter.
///
/// Filter comes from `RUST_LOG` when set; JSON output when
/// `RUST_ENV=production`, pretty output otherwise.
pub fn init_logging() -> TelemetryResult<()> {
    init_logging_with_default(DEFAULT_DIRECTIVE)
}

/// Initialize structured logging with a caller-supplied default directive.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_default(default_directive: &str) -> TelemetryResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if production_env() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_names(true),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;

    info!(json = production_env(), "Logging initialized");
    Ok(())
}

fn production_env() -> bool {
    std::env::var("RUST_ENV").map(|v| v == "production").unwrap_or(false)
}
