//! Storefront handlers.
//!
//! # Responsibilities
//! - Implement the public storefront surface: home/about/contact pages,
//!   catalog browsing with pagination, product view, session cart
//! - Populate the handler registry the dispatcher resolves against
//!
//! # Design Decisions
//! - Handlers produce page descriptors; markup is the view layer's job
//! - Each handler is a thin shell over the catalog store and the session
//! - Cart mutations that have nothing to show complete without output,
//!   which routes the visitor to the fallback page

pub mod cart;
pub mod catalog;
pub mod product;
pub mod site;

use std::sync::Arc;

use crate::data::CatalogStore;
use crate::dispatch::HandlerRegistry;

pub use cart::CartHandler;
pub use catalog::CatalogHandler;
pub use product::ProductHandler;
pub use site::SiteHandler;

/// Build the registry of all storefront controllers.
pub fn registry(catalog: Arc<CatalogStore>) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();

    let store = Arc::clone(&catalog);
    registry.register("SiteController", move || {
        Box::new(SiteHandler::new(Arc::clone(&store)))
    });

    let store = Arc::clone(&catalog);
    registry.register("CatalogController", move || {
        Box::new(CatalogHandler::new(Arc::clone(&store)))
    });

    let store = Arc::clone(&catalog);
    registry.register("ProductController", move || {
        Box::new(ProductHandler::new(Arc::clone(&store)))
    });

    let store = Arc::clone(&catalog);
    registry.register("CartController", move || {
        Box::new(CartHandler::new(Arc::clone(&store)))
    });

    registry
}
