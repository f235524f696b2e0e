//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the demo application handler
//! - Mount the trailing-slash filter in front of it
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve until shutdown

use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    http::Method,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::middleware::RouterExt;
use crate::http::request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
use crate::lifecycle::signals::shutdown_signal;
use crate::slash::{ExceptionPolicyBuilder, TrailingSlash};

/// HTTP server hosting the trailing-slash filter.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig) -> Router {
        let mut router = Router::new()
            .route("/", any(echo_handler))
            .fallback(echo_handler);

        if config.trailing_slash.enabled {
            let policy = ExceptionPolicyBuilder::from_config(&config.trailing_slash).build();
            tracing::info!(
                except_empty = policy.except_empty(),
                except_with_extension = policy.except_with_extension(),
                except_from_api = policy.except_from_api(),
                custom_exception = policy.has_custom_exception(),
                api_root = %policy.api_root(),
                "Trailing slash filter enabled"
            );
            router = router.trailing_slash(TrailingSlash::new(policy));
        } else {
            tracing::info!("Trailing slash filter disabled");
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = request_id(req).unwrap_or("unknown"),
                    )
                }))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on the `shutdown` broadcast or on Ctrl+C / SIGTERM.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => tracing::info!("Shutdown requested"),
                    _ = shutdown_signal() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for in-process use without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Stand-in for the application behind the filter. Echoes what it received.
async fn echo_handler(method: Method, req: Request) -> String {
    let path = req
        .uri()
        .path_and_query()
        .map_or("/", |pq| pq.as_str());
    format!("{method} {path}")
}
