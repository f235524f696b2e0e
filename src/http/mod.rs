//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → middleware/trailing_slash.rs (redirect or pass)
//!     → application handler
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use middleware::RouterExt;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
