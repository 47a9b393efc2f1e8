//! Pricing API routes, mounted under `/api`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::{CalculatePriceRequest, HistoryQuery};
use super::responses::{CalculatePriceResponse, HistoryEntryResponse};
use super::services;

/// Build the pricing router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculate-price", post(calculate_price))
        .route("/calculation-history", get(calculation_history))
}

/// Price a batch of diamonds
async fn calculate_price(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculatePriceRequest>, JsonRejection>,
) -> Result<Json<CalculatePriceResponse>> {
    let Json(request) = payload?;
    let record =
        services::calculate_price(state.config.pricing_settings(), &state.cache, request).await?;
    Ok(Json(CalculatePriceResponse::try_from(record.as_ref())?))
}

/// Recent calculations, newest first
async fn calculation_history(
    State(state): State<AppState>,
    query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<HistoryEntryResponse>>> {
    let Query(query) = query?;
    let max_limit = usize::try_from(state.config.history_capacity).unwrap_or(usize::MAX);
    let limit = query.limit.clamp(1, max_limit.max(1));

    // Stored caller names are trimmed, so match on the trimmed form
    let staff_id = query
        .staff_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let entries = state
        .cache
        .recent_calculations(staff_id, limit)
        .iter()
        .map(|record| HistoryEntryResponse::try_from(record.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!("Returning {} history entries", entries.len());
    Ok(Json(entries))
}
