//! Host server for the trailing-slash filter.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ trailing slash ──┬──▶ application
//!                                                             │
//!     ◀────────────── 301 / 307 Location: /path/ ◀────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use trailing_slash::config::{load_config, AppConfig};
use trailing_slash::lifecycle::{startup, Shutdown};
use trailing_slash::observability::logging;

#[derive(Parser)]
#[command(name = "trailing-slash")]
#[command(about = "HTTP server that redirects paths to their trailing-slash form", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!("trailing-slash v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    startup::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
