//! Gateway binary entry point
//!
//! Loads configuration, reads the NASA API key from the environment (a `.env`
//! file is honoured) and serves the proxy endpoints plus the public directory.

use anyhow::Result;
use clap::Parser;
use mission_api::{ApiKey, MissionServer};
use mission_common::{SystemConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mission-server")]
#[command(version)]
#[command(about = "Proxy gateway for NASA's Mars rover and APOD APIs")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory served at `/`
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// NASA API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before clap reads `API_KEY`
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = SystemConfig::load_or_default(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    mission_common::init_tracing_with_level(&config.logging.level)?;

    info!("Mission Mars gateway v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }
    if let Some(dir) = cli.public_dir {
        config.gateway.public_dir = dir;
    }
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let api_key = cli.api_key.map(ApiKey::new).unwrap_or_else(ApiKey::demo);

    MissionServer::new(config, api_key)?.run().await
}
