//! HTTP Basic authentication for inbound requests.
//!
//! One fixed principal is accepted. Requests to `PUBLIC_PATHS` pass
//! through without credentials.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;

/// Paths that don't require authentication.
pub const PUBLIC_PATHS: &[&str] = &["/v3/api-docs"];

/// The principal allowed to call the API.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true if the pair matches this principal.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Rejects requests that lack valid Basic credentials.
pub async fn require_basic_auth(
    State(credentials): State<Arc<Credentials>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if is_public_path(path) {
        return next.run(request).await;
    }

    match decode_basic(request.headers()) {
        Some((user, password)) if credentials.matches(&user, &password) => next.run(request).await,
        Some((user, _)) => {
            debug!(path, user = %user, "rejected credentials");
            ApiError::Unauthorized.into_response()
        }
        None => {
            debug!(path, "missing basic credentials");
            ApiError::Unauthorized.into_response()
        }
    }
}

/// Extracts `(username, password)` from an `Authorization: Basic` header.
pub fn decode_basic(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| path == *public)
}
