//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedRoute (controller, action, params)
//!     → registry.rs (controller name → handler factory)
//!     → handler.rs (fresh instance runs the named action)
//!     → dispatcher.rs (map the result to a terminal DispatchOutcome)
//!
//! Outcome states:
//!     Matched → HandlerNotFound
//!             → ActionInvoked → Completed
//!                             → ActionNotFound
//!                             → InvocationError
//!                             → FallbackRendered   (action produced no output)
//! ```
//!
//! # Design Decisions
//! - Explicit registry populated at startup; no lookup by reflection
//! - Handlers are instantiated per request and stateless across requests
//! - The request context is injected, handlers own no ambient state
//! - Every failure becomes a terminal outcome; nothing escapes the
//!   dispatch boundary

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod registry;

pub use context::RequestContext;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use handler::{ActionResult, Handler, HandlerError, Page};
pub use registry::HandlerRegistry;
