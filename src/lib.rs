//! Diamond price estimator service.
//!
//! The pricing engine lives in [`pricing`]; everything else wires it to HTTP.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::cache::AppCache;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cache = AppCache::new(config.history_capacity, config.history_ttl);
        Self {
            config: Arc::new(config),
            cache,
        }
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let api = pricing::router().route("/health", get(routes::system::health));

    Router::new()
        .route("/", get(routes::system::home))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
