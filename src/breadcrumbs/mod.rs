//! Breadcrumb trail subsystem.
//!
//! # Responsibilities
//! - Derive a navigation trail from the request path
//! - Produce crumb descriptors (label + optional href)
//!
//! # Design Decisions
//! - Descriptors only; markup belongs to the view layer
//! - Labels humanise path segments (dashes become spaces)
//! - A segment with a file extension ends the trail unlinked

pub mod trail;

pub use trail::{trail, Crumb};
