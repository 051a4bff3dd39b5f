//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Compile routes → Register handlers → Serve
//!
//! Shutdown:
//!     SIGINT / broadcast trigger → Stop accepting → Drain in-flight → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then the dispatch core, then the listener
//! - Any long-running task can subscribe to the shutdown broadcast

pub mod shutdown;

pub use shutdown::Shutdown;
