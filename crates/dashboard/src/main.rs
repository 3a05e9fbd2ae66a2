//! Mission Mars dashboard
//!
//! Renders the dashboard into an HTML file under the gateway's public
//! directory and re-renders it after every state change. Commands are read
//! from stdin, one per line: `dashboard`, a rover name, `next`, `prev`,
//! `quit`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mission_common::{SystemConfig, DEFAULT_CONFIG_FILE};
use mission_dashboard::{
    input::spawn_line_reader, Application, FileSurface, HttpGateway, UpdateOptions,
};
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "mission-dashboard")]
#[command(version)]
#[command(about = "Mars rover dashboard renderer")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Gateway URL
    #[arg(short, long)]
    server: Option<String>,

    /// HTML file to render into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Apply photo responses even when the selection has moved on
    #[arg(long)]
    keep_stale_photos: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SystemConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(path) = cli.log_file {
        config.logging.log_file = Some(path);
    }
    if let Some(server) = cli.server {
        config.dashboard.server_url = server;
    }
    if let Some(output) = cli.output {
        config.dashboard.output = output;
    }
    if cli.keep_stale_photos {
        config.dashboard.discard_stale_photos = false;
    }

    let _guard = match &config.logging.log_file {
        Some(path) => Some(mission_common::init_file_tracing(&config.logging.level, path)?),
        None => {
            mission_common::init_tracing_with_level(&config.logging.level)?;
            None
        }
    };

    config.validate().context("Invalid configuration")?;

    info!("Mission Mars dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Gateway: {}", config.dashboard.server_url);
    info!("Rendering to {}", config.dashboard.output.display());

    let gateway = Arc::new(
        HttpGateway::new(&config.dashboard.server_url).context("Failed to create gateway client")?,
    );
    let surface = FileSurface::new(&config.dashboard.output);
    let options = UpdateOptions {
        discard_stale_photos: config.dashboard.discard_stale_photos,
    };

    let mut app = Application::new(gateway, surface, options);
    let _input = spawn_line_reader(BufReader::new(tokio::io::stdin()), app.sender());

    app.run().await?;

    info!("Mission Mars dashboard shutting down");
    Ok(())
}
