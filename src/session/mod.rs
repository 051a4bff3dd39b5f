//! Session subsystem.
//!
//! # Responsibilities
//! - Keep per-visitor state (the shopping cart) between requests
//! - Hand each request a session handle resolved from its cookie
//!
//! # Design Decisions
//! - In-memory store keyed by UUID; persistence is out of scope
//! - Handlers receive the session through the request context instead of
//!   reaching into process-wide state
//! - Sharded map keeps cross-request access lock-light

pub mod store;

pub use store::{Session, SessionStore};
