//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! slash appender, http server
//!     → logging.rs (structured log events)
//!     → metrics.rs (redirect / passthrough counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
