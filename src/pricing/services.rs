//! Pricing service functions.
//!
//! Glue between the HTTP layer and the pure calculators: validate the batch,
//! price it, and record the calculation in the history cache.

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::AppCache;

use super::calculators::price_batch;
use super::models::{CalculationRecord, PricedDiamond};
use super::requests::CalculatePriceRequest;
use super::validation::{validate_batch, ValidationError};

/// Caller name recorded when no staff ID is supplied
pub const ANONYMOUS: &str = "anonymous";

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// A diamond failed validation; nothing in the batch was priced
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Arithmetic impossibility after validation passed
    #[error("Computation error: {message}")]
    Computation { message: String },
}

/// Settings the pricing service needs from configuration
#[derive(Debug, Clone, Copy)]
pub struct PricingSettings {
    pub base_price_per_carat: Decimal,
    pub max_batch_size: usize,
}

/// Validate, price and record a batch.
///
/// Validation failures abort before any pricing happens. Successful
/// calculations are stored in the history cache and returned.
pub async fn calculate_price(
    settings: PricingSettings,
    cache: &AppCache,
    request: CalculatePriceRequest,
) -> Result<Arc<CalculationRecord>, PricingError> {
    let calculated_by = request
        .staff_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string();

    let diamonds = validate_batch(&request.diamonds, request.mode, settings.max_batch_size)
        .inspect_err(|e| warn!(calculated_by = %calculated_by, "Rejected pricing request: {}", e))?;

    let result = price_batch(settings.base_price_per_carat, &diamonds)?;

    let items = diamonds
        .into_iter()
        .zip(result.item_prices.iter().copied())
        .map(|(diamond, line_total)| PricedDiamond {
            diamond,
            line_total,
        })
        .collect();

    let record = Arc::new(CalculationRecord {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        calculated_by,
        mode: request.mode,
        items,
        total_price: result.total_price,
    });

    info!(
        calculation_id = %record.id,
        calculated_by = %record.calculated_by,
        items = record.items.len(),
        total = %record.total_price,
        "Priced diamond batch"
    );

    cache.record_calculation(record.clone()).await;

    Ok(record)
}
