//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use storefront::{HttpServer, Shutdown, StorefrontConfig};

/// Spawn a storefront server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the
/// handle leaves the task running for the rest of the test process.
pub async fn spawn_storefront(config: StorefrontConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the accept loop a moment to come up.
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}

/// HTTP client with a cookie store, so the session survives across
/// requests like a browser's would.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .no_proxy()
        .build()
        .unwrap()
}
