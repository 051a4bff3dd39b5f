//! Request-scoped context.

use crate::session::Session;

/// State a handler action may need, owned by the dispatcher and injected
/// per request.
///
/// Handlers never reach into process-wide state; everything request-bound
/// travels here.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id assigned by the HTTP layer.
    pub request_id: String,
    /// Request path with leading/trailing slashes trimmed.
    pub path: String,
    /// The visitor's session (cart state).
    pub session: Session,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, path: impl Into<String>, session: Session) -> Self {
        Self {
            request_id: request_id.into(),
            path: path.into(),
            session,
        }
    }
}
