//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every route pattern compiles as a regex
//! - Check targets and addresses are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: StorefrontConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::StorefrontConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A route pattern is not a valid regular expression.
    #[error("route pattern '{pattern}' does not compile: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// A route rule maps to nothing.
    #[error("route pattern '{pattern}' has an empty target")]
    EmptyTarget { pattern: String },

    /// The dispatch fallback route is empty.
    #[error("dispatch fallback route is empty")]
    EmptyFallback,

    /// An address field cannot be parsed as host:port.
    #[error("'{field}' value '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &StorefrontConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for rule in &config.routes {
        if let Err(source) = regex::Regex::new(&rule.pattern) {
            errors.push(ValidationError::InvalidPattern {
                pattern: rule.pattern.clone(),
                source,
            });
        }

        if rule.target.trim().is_empty() {
            errors.push(ValidationError::EmptyTarget {
                pattern: rule.pattern.clone(),
            });
        }
    }

    if config.dispatch.fallback_route.trim().is_empty() {
        errors.push(ValidationError::EmptyFallback);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics
        && config
            .observability
            .metrics_bind_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_bind_address",
            value: config.observability.metrics_bind_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
