//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (dispatch counters, latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; level set through the environment
//! - Request ID flows through dispatch logs
//! - Metric updates are cheap; the exporter is off unless configured

pub mod logging;
pub mod metrics;
