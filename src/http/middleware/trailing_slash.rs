//! Trailing-slash middleware.
//! Short-circuits with a redirect before the inner service runs.

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::slash::{path, RequestTarget, TrailingSlash};

/// Redirect to the slashed path when the policy requires it.
pub async fn trailing_slash_middleware(
    State(appender): State<TrailingSlash>,
    req: Request,
    next: Next,
) -> Response {
    match appender.append(RequestTarget::from_request(&req)) {
        Some(redirect) => redirect.into_response(),
        None => next.run(req).await,
    }
}

/// Redirect every request to its slashed path, ignoring the policy.
///
/// Meant for subtrees that only ever serve directory-style URLs. Requests
/// already on the normalized path are passed through to avoid a loop.
pub async fn force_trailing_slash_middleware(
    State(appender): State<TrailingSlash>,
    req: Request,
    next: Next,
) -> Response {
    let redirect = {
        let target = RequestTarget::from_request(&req);
        (path::wrap(target.path) != target.path).then(|| appender.append_anyway(target))
    };
    match redirect {
        Some(redirect) => redirect.into_response(),
        None => next.run(req).await,
    }
}

/// Mounts the trailing-slash middleware on a router.
///
/// Like any `Router::layer`, only routes and fallbacks added before the call
/// are covered.
pub trait RouterExt<S> {
    fn trailing_slash(self, appender: TrailingSlash) -> Self;

    fn force_trailing_slash(self, appender: TrailingSlash) -> Self;
}

impl<S> RouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn trailing_slash(self, appender: TrailingSlash) -> Self {
        self.layer(middleware::from_fn_with_state(appender, trailing_slash_middleware))
    }

    fn force_trailing_slash(self, appender: TrailingSlash) -> Self {
        self.layer(middleware::from_fn_with_state(appender, force_trailing_slash_middleware))
    }
}
