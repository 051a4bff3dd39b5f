//! Request-side helpers: ids, path trimming, session cookie.
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The session cookie carries only an opaque UUID

use axum::http::HeaderMap;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "storefront_session";

/// Header carrying the request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Strip leading and trailing slashes from a request path.
pub fn trim_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Correlation id set by the request-id layer, or a placeholder.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Extract the session id from the Cookie header, if present and valid.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            value.parse().ok()
        } else {
            None
        }
    })
}

/// Set-Cookie value for a freshly created session.
pub fn session_cookie(id: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, id)
}
