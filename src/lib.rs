//! Storefront server library

pub mod breadcrumbs;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pagination;
pub mod routing;
pub mod session;

pub use config::StorefrontConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
