//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! storefront server. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the storefront.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Listener configuration (bind address, limits).
    pub listener: ListenerConfig,

    /// Ordered route table; first matching pattern wins.
    pub routes: Vec<RouteRule>,

    /// Dispatch policy settings.
    pub dispatch: DispatchConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            routes: default_routes(),
            dispatch: DispatchConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// One route table entry: a regex pattern and the internal route template
/// its capture groups substitute into.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRule {
    /// Pattern matched (unanchored) against the trimmed request path.
    pub pattern: String,

    /// Internal route template, e.g. `product/view/$1`.
    pub target: String,
}

/// Dispatch policy settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Internal route rendered when a handler action completes without
    /// producing output.
    pub fallback_route: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            fallback_route: "site/about".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics: bool,

    /// Bind address for the metrics scrape endpoint.
    pub metrics_bind_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics: false,
            metrics_bind_address: "127.0.0.1:9000".to_string(),
        }
    }
}

/// The storefront's stock route table.
///
/// Specific patterns come before general ones; every pattern is anchored
/// so unanchored matching cannot cross rules up.
fn default_routes() -> Vec<RouteRule> {
    let rules = [
        ("^product/([0-9]+)$", "product/view/$1"),
        (
            "^catalog/category/([0-9]+)/page-([0-9]+)$",
            "catalog/category/$1/$2",
        ),
        ("^catalog/category/([0-9]+)$", "catalog/category/$1"),
        ("^catalog$", "catalog/index"),
        ("^cart/checkout$", "cart/checkout"),
        ("^cart/add/([0-9]+)$", "cart/add/$1"),
        ("^cart/addAjax/([0-9]+)$", "cart/addAjax/$1"),
        ("^cart/delete/([0-9]+)$", "cart/delete/$1"),
        ("^cart$", "cart/index"),
        ("^contacts$", "site/contact"),
        ("^about$", "site/about"),
        ("^$", "site/index"),
    ];

    rules
        .into_iter()
        .map(|(pattern, target)| RouteRule {
            pattern: pattern.to_string(),
            target: target.to_string(),
        })
        .collect()
}
