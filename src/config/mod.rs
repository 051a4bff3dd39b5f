//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! storefront.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → StorefrontConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All sections have defaults so a minimal config works
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every broken rule, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DispatchConfig, ListenerConfig, RouteRule, StorefrontConfig};
pub use validation::{validate_config, ValidationError};
