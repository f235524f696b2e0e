//! Startup orchestration.
//!
//! Fail fast: any startup error is fatal. The listener binds last so traffic
//! only arrives once the filter is built.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Error type for server startup and serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("metrics address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the exporter, bind the listener and serve until shutdown.
pub async fn start(config: AppConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        virtual_root = %config.trailing_slash.virtual_root,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
