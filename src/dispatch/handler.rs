//! Handler contract and action results.

use serde::Serialize;
use thiserror::Error;

use crate::dispatch::context::RequestContext;

/// A page descriptor produced by a handler action.
///
/// Identifies the view to render plus the data it needs; turning this
/// into markup is the view layer's concern.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// View identifier, e.g. `catalog/category`.
    pub view: String,
    pub title: String,
    pub description: String,
    /// View data payload.
    pub data: serde_json::Value,
}

impl Page {
    pub fn new(view: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            title: title.into(),
            description: String::new(),
            data: serde_json::Value::Null,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Failure raised inside a handler action.
///
/// These never cross the dispatch boundary verbatim; the dispatcher logs
/// them and reports a generic outcome.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler has no action by this name.
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    /// A positional parameter is missing or unusable.
    #[error("parameter {index} is invalid: {reason}")]
    InvalidParameter { index: usize, reason: String },

    /// Anything else that went wrong while running the action.
    #[error("{0}")]
    Internal(String),
}

/// What an action produces: a page, or `None` when the action completed
/// without output (the dispatcher then renders the fallback page).
pub type ActionResult = Result<Option<Page>, HandlerError>;

/// One family of request actions (a controller).
///
/// Implementations are instantiated fresh for every request and must not
/// keep state between calls. Parameters arrive as the verbatim path
/// segments; coercion happens here.
pub trait Handler: Send + Sync {
    fn handle(&self, action: &str, params: &[String], ctx: &RequestContext) -> ActionResult;
}

/// Parse a required positional parameter.
pub fn param<T: std::str::FromStr>(params: &[String], index: usize) -> Result<T, HandlerError> {
    let raw = params.get(index).ok_or(HandlerError::InvalidParameter {
        index,
        reason: "missing".to_string(),
    })?;

    raw.parse().map_err(|_| HandlerError::InvalidParameter {
        index,
        reason: format!("'{}' could not be parsed", raw),
    })
}

/// Parse an optional positional parameter, falling back to a default when
/// the segment is absent.
pub fn param_or<T: std::str::FromStr>(
    params: &[String],
    index: usize,
    default: T,
) -> Result<T, HandlerError> {
    match params.get(index) {
        Some(raw) => raw.parse().map_err(|_| HandlerError::InvalidParameter {
            index,
            reason: format!("'{}' could not be parsed", raw),
        }),
        None => Ok(default),
    }
}
