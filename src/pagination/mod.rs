//! Pagination subsystem.
//!
//! # Data Flow
//! ```text
//! List handler (total count, requested page, page size)
//!     → window.rs (clamp page, compute visible window)
//!     → PageLink descriptors (label, target page, href, flags)
//!     → View layer renders markup (out of scope here)
//! ```
//!
//! # Design Decisions
//! - Constructed fresh per list request, immutable afterwards
//! - All inputs are clamped, never rejected: there is no error path
//! - Fixed window of 10 links, current page kept near the middle
//! - Emits descriptors, not markup

pub mod window;

pub use window::{PageLink, Pagination};
