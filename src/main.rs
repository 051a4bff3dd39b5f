//! Storefront server
//!
//! An e-commerce storefront built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                   STOREFRONT                     │
//!                      │                                                  │
//!     Client Request   │  ┌─────────┐   ┌──────────┐   ┌──────────────┐  │
//!     ─────────────────┼─▶│  http   │──▶│ routing  │──▶│  dispatch    │  │
//!                      │  │ server  │   │  table   │   │  + registry  │  │
//!                      │  └─────────┘   └──────────┘   └──────┬───────┘  │
//!                      │                                      │          │
//!                      │                                      ▼          │
//!                      │  ┌─────────┐   ┌──────────┐   ┌──────────────┐  │
//!     Client Response  │  │response │◀──│   page   │◀──│   handlers   │  │
//!     ◀────────────────┼──│ mapping │   │descriptor│   │ (site, cart, │  │
//!                      │  └─────────┘   └──────────┘   │  catalog, …) │  │
//!                      │                               └──────────────┘  │
//!                      │                                                  │
//!                      │  ┌────────────────────────────────────────────┐ │
//!                      │  │           Cross-Cutting Concerns           │ │
//!                      │  │  config · session · pagination · crumbs    │ │
//!                      │  │  observability · lifecycle                 │ │
//!                      │  └────────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tokio::net::TcpListener;

use storefront::config::{load_config, StorefrontConfig};
use storefront::http::HttpServer;
use storefront::lifecycle::Shutdown;
use storefront::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    tracing::info!("storefront v0.1.0 starting");

    let config_path = PathBuf::from(
        std::env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| "storefront.toml".to_string()),
    );

    let config = if config_path.exists() {
        match load_config(&config_path) {
            Ok(config) => config,
            Err(storefront::config::ConfigError::Validation(errors)) => {
                for error in &errors {
                    tracing::error!(%error, "Invalid configuration");
                }
                return Err("configuration validation failed".into());
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        tracing::info!(path = %config_path.display(), "No config file, using defaults");
        StorefrontConfig::default()
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        fallback_route = %config.dispatch.fallback_route,
        "Configuration loaded"
    );

    if config.observability.metrics {
        let addr = config.observability.metrics_bind_address.parse()?;
        metrics::install_exporter(addr)?;
        tracing::info!(address = %addr, "Metrics exporter listening");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let shutdown = Shutdown::new();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    Ok(())
}
