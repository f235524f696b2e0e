//! Trailing-slash normalization core.
//!
//! # Data Flow
//! ```text
//! request path, query, method
//!     → appender.rs (RequestTarget, append / append_anyway)
//!     → classifier.rs (ExceptionPolicy decides if a slash is needed)
//!     → redirect.rs (location + 301/307 status)
//!     → http middleware applies the Redirect
//! ```
//!
//! Nothing in here performs I/O or holds mutable state. The policy is built
//! once and shared read-only between requests.

pub mod appender;
pub mod classifier;
pub mod path;
pub mod redirect;

pub use appender::{RequestTarget, TrailingSlash};
pub use classifier::{needs_trailing_slash, CustomException, ExceptionPolicy, ExceptionPolicyBuilder};
pub use redirect::{build_redirect, redirect_status, Redirect};
