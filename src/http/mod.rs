//! HTTP front controller subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, session cookie)
//!     → request.rs (request id, path trimming, cookie parsing)
//!     → routing table → dispatcher
//!     → response.rs (DispatchOutcome → HTTP response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use server::HttpServer;
