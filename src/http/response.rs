//! Outcome-to-response mapping.
//!
//! # Design Decisions
//! - Pages are served as JSON descriptors; markup is not produced here
//! - Every dispatch failure maps to one uniform body, details stay in
//!   the logs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dispatch::DispatchOutcome;

/// Body for any dispatch-time failure.
pub const DISPATCH_FAILED: &str = "An error occurred while dispatching the request.";

/// Body when no route pattern matched the path.
pub const NO_ROUTE: &str = "No matching route found";

/// Translate a terminal dispatch outcome into an HTTP response.
pub fn outcome_response(outcome: DispatchOutcome) -> Response {
    match outcome {
        DispatchOutcome::Completed(page) | DispatchOutcome::FallbackRendered(page) => {
            (StatusCode::OK, Json(page)).into_response()
        }
        DispatchOutcome::HandlerNotFound { .. }
        | DispatchOutcome::ActionNotFound { .. }
        | DispatchOutcome::InvocationError { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, DISPATCH_FAILED).into_response()
        }
    }
}
