//! Request-level entry point combining classification and redirect.

use std::sync::Arc;

use axum::extract::OriginalUri;
use axum::http::{Request, Uri};

use crate::observability::metrics;
use crate::slash::classifier::ExceptionPolicy;
use crate::slash::redirect::{build_redirect, Redirect};

/// The parts of a request the filter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTarget<'a> {
    /// Absolute path, without scheme, host or query.
    pub path: &'a str,
    /// Raw query string including its leading `?`, or empty.
    pub query: &'a str,
    pub method: &'a str,
}

impl<'a> RequestTarget<'a> {
    pub fn new(path: &'a str, query: &'a str, method: &'a str) -> Self {
        Self { path, query, method }
    }

    /// Borrow path, query and method from an HTTP request.
    ///
    /// Under `Router::nest` axum strips the mount prefix from the request
    /// URI, so the [`OriginalUri`] extension is preferred when present.
    pub fn from_request<B>(req: &'a Request<B>) -> Self {
        let uri = req
            .extensions()
            .get::<OriginalUri>()
            .map_or(req.uri(), |original| &original.0);
        Self::from_uri(uri, req.method().as_str())
    }

    /// Borrow path and query from a URI.
    ///
    /// The query keeps its `?` so it can be appended to the location as is.
    pub fn from_uri(uri: &'a Uri, method: &'a str) -> Self {
        let query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .and_then(|pq| pq.find('?').map(|idx| &pq[idx..]))
            .unwrap_or("");

        Self {
            path: uri.path(),
            query,
            method,
        }
    }
}

/// Appends a trailing slash to request paths by redirecting the client.
#[derive(Debug, Clone, Default)]
pub struct TrailingSlash {
    policy: Arc<ExceptionPolicy>,
}

impl TrailingSlash {
    pub fn new(policy: ExceptionPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &ExceptionPolicy {
        &self.policy
    }

    /// Redirect to the slashed path if the policy requires it.
    pub fn append(&self, target: RequestTarget<'_>) -> Option<Redirect> {
        let url = target.path.trim();

        if !self.policy.needs_trailing_slash(url) {
            tracing::trace!(path = %target.path, "Path exempt from trailing slash");
            metrics::record_passthrough();
            return None;
        }

        Some(self.append_anyway(target))
    }

    /// Redirect to the slashed path even when it is not required.
    pub fn append_anyway(&self, target: RequestTarget<'_>) -> Redirect {
        let redirect = build_redirect(target.path, target.query, target.method);

        tracing::debug!(
            method = %target.method,
            path = %target.path,
            location = %redirect.location(),
            status = %redirect.status_line(),
            "Redirecting to trailing slash"
        );
        metrics::record_redirect(redirect.status().as_u16());

        redirect
    }
}
