//! Pulseboard demo shell - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Interactive dashboard shell with simulated real-time feeds.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PULSEBOARD_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pulseboard_telemetry::init_logging()?;

    info!("Starting pulseboard v{}", env!("CARGO_PKG_VERSION"));

    // Config path precedence: CLI arg > PULSEBOARD_CONFIG env var > default.
    let config_path = args
        .config
        .or_else(|| std::env::var("PULSEBOARD_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = pulseboard_app::AppConfig::load_or_default(&config_path)?;

    let mut app = pulseboard_app::Application::new(config)?;
    app.run().await?;

    Ok(())
}
