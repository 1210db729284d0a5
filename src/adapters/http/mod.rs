//! HTTP adapters - REST API implementations.
//!
//! Calendar endpoints are nested under `/calendar`; `/health` sits at the root.
//! Every route shares the same middleware stack: request timeout, tracing, CORS.

pub mod calendar;

pub use calendar::{calendar_routes, CalendarHandlers};

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::ServerConfig;

/// Creates the application router with all routes and middleware.
pub fn app_router(handlers: CalendarHandlers, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/calendar", calendar_routes(handlers))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

/// GET /health
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Permissive without configured origins, otherwise restricted to them.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
