//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path (slashes trimmed)
//!     → table.rs (ordered regex scan, first match wins)
//!     → capture-group substitution into the rule's target template
//!     → route.rs (internal route → controller / action / params)
//!     → Return: ResolvedRoute or None
//!
//! Table compilation (at startup):
//!     RouteRule[] from config
//!     → Compile each pattern as a regex
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Patterns match unanchored: any substring hit selects a rule, so
//!   patterns must anchor themselves (`^...$`) when they need strictness
//! - Ordering is significant and is the operator's responsibility
//! - Parameters stay strings; coercion belongs to the handlers

pub mod route;
pub mod table;

pub use route::ResolvedRoute;
pub use table::RouteTable;
