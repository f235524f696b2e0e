//! Redirect construction.
//!
//! `GET` requests get a permanent 301. Every other method gets a 307 so the
//! client replays the same method and body against the new location.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::slash::path;

/// Redirect directive for the host HTTP layer to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    status: StatusCode,
    location: String,
}

impl Redirect {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reason phrase of the status line, e.g. `Moved Permanently`.
    pub fn status_reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Value of the `Location` header: normalized path plus original query.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Full status line without the protocol, e.g. `301 Moved Permanently`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status.as_u16(), self.status_reason())
    }

    /// Render the directive as a response with an empty body.
    ///
    /// Fails when the location contains bytes not allowed in a header value.
    pub fn try_into_response(self) -> Result<Response, header::InvalidHeaderValue> {
        let location = HeaderValue::try_from(self.location)?;
        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.status;
        response.headers_mut().insert(header::LOCATION, location);
        Ok(response)
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let location = self.location.clone();
        match self.try_into_response() {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(location = %location, error = %e, "Invalid redirect location");
                (StatusCode::BAD_REQUEST, "Invalid request path").into_response()
            }
        }
    }
}

/// Pick the redirect status for a request method. Case-insensitive.
pub fn redirect_status(method: &str) -> StatusCode {
    if method.eq_ignore_ascii_case("GET") {
        StatusCode::MOVED_PERMANENTLY
    } else {
        StatusCode::TEMPORARY_REDIRECT
    }
}

/// Build the redirect to the slashed form of `url`.
///
/// `query` is appended verbatim and must carry its own leading `?`. A path
/// that is empty or all slashes redirects to `/`, never to `//`.
pub fn build_redirect(url: &str, query: &str, method: &str) -> Redirect {
    let mut location = path::wrap(url);
    location.push_str(query);

    Redirect {
        status: redirect_status(method),
        location,
    }
}
