//! Catalog data subsystem.
//!
//! # Responsibilities
//! - Hold the product and category data the storefront serves
//! - Answer the list/by-id/count queries handlers need
//!
//! # Design Decisions
//! - In-memory stand-in for the real data layer; the query surface is
//!   what matters to the rest of the system, not the backing store
//! - Read-only after construction, shared via Arc across requests

pub mod catalog;

pub use catalog::{CatalogStore, Category, Product, SHOW_BY_DEFAULT};
