//! Axum middleware.

pub mod trailing_slash;

pub use trailing_slash::{force_trailing_slash_middleware, trailing_slash_middleware, RouterExt};
