//! HTTP server setup and the front controller.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all front controller
//! - Wire up middleware (timeout, request ID, tracing)
//! - Resolve each request through the route table and dispatcher
//! - Map outcomes to responses and manage the session cookie

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{StorefrontConfig, ValidationError};
use crate::data::CatalogStore;
use crate::dispatch::{Dispatcher, RequestContext};
use crate::handlers;
use crate::http::{request, response};
use crate::lifecycle::shutdown::wait_for_shutdown;
use crate::observability::metrics;
use crate::routing::RouteTable;
use crate::session::SessionStore;

/// Application state injected into the front controller.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub dispatcher: Arc<Dispatcher>,
    pub sessions: Arc<SessionStore>,
}

/// HTTP server for the storefront.
pub struct HttpServer {
    router: Router,
    config: StorefrontConfig,
}

impl HttpServer {
    /// Build the server: compile the route table, register the storefront
    /// handlers, and assemble the middleware stack.
    pub fn new(config: StorefrontConfig) -> Result<Self, ValidationError> {
        let table = RouteTable::from_rules(&config.routes)?;

        let catalog = Arc::new(CatalogStore::demo());
        let registry = handlers::registry(catalog);
        let dispatcher = Dispatcher::new(registry, &config.dispatch.fallback_route);

        let state = AppState {
            table: Arc::new(table),
            dispatcher: Arc::new(dispatcher),
            sessions: Arc::new(SessionStore::new()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &StorefrontConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(front_controller))
            .route("/", any(front_controller))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

/// Front controller: every storefront path lands here.
async fn front_controller(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request::request_id(request.headers());
    let path = request.uri().path().to_string();
    let trimmed = request::trim_path(&path);

    tracing::debug!(
        request_id = %request_id,
        path = %path,
        "Routing request"
    );

    let Some(route) = state.table.resolve(trimmed) else {
        tracing::warn!(request_id = %request_id, path = %path, "No route matched");
        metrics::record_dispatch("unmatched", start);
        return (StatusCode::NOT_FOUND, response::NO_ROUTE).into_response();
    };

    let (session, fresh) = state.sessions.open(request::session_id(request.headers()));
    let ctx = RequestContext::new(request_id, trimmed, session.clone());

    let outcome = state.dispatcher.dispatch(&route, &ctx);
    metrics::record_dispatch(outcome.label(), start);

    let mut response = response::outcome_response(outcome);
    if fresh {
        if let Ok(value) = HeaderValue::from_str(&request::session_cookie(session.id())) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }

    response
}
