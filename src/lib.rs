//! Trailing-slash normalization for HTTP request paths.
//!
//! Redirects `/users` to `/users/` (301 for `GET`, 307 otherwise) unless the
//! path is exempt: empty, has a file extension, lives under the api root, or
//! matches a custom rule.
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use trailing_slash::{ExceptionPolicy, RouterExt, TrailingSlash};
//!
//! let policy = ExceptionPolicy::builder()
//!     .virtual_root("/shop")
//!     .except(|path: &str| path.starts_with("/health"))
//!     .build();
//!
//! let app: Router = Router::new()
//!     .route("/users/", get(|| async { "users" }))
//!     .fallback(|| async { "not found" })
//!     .trailing_slash(TrailingSlash::new(policy));
//! ```

// Core
pub mod slash;

// Host integration
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::{HttpServer, RouterExt};
pub use lifecycle::Shutdown;
pub use slash::{
    build_redirect, needs_trailing_slash, ExceptionPolicy, ExceptionPolicyBuilder, Redirect,
    RequestTarget, TrailingSlash,
};
