//! Welcome and health route handlers

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cache::CacheStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_per_carat: Decimal,
    pub max_batch_size: usize,
    pub history: CacheStats,
}

/// Root handler
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Diamond Calculator API!",
    })
}

/// Health check with pricing configuration and cache statistics
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        base_price_per_carat: state.config.base_price_per_carat,
        max_batch_size: state.config.max_batch_size,
        history: state.cache.stats().await,
    })
}
