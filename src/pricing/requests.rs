//! Request DTOs for pricing API endpoints.
//!
//! Rows stay loosely typed here; [`super::validation`] owns every domain
//! check, including the JSON type of each field, so failures can be reported
//! with the offending index.

use serde::Deserialize;
use serde_json::Value;

use super::models::PricingMode;

/// Request to price a batch of diamonds
#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    #[serde(default)]
    pub staff_id: Option<String>,
    #[serde(default)]
    pub mode: PricingMode,
    /// Raw rows, read into [`DiamondRequest`] during validation
    pub diamonds: Vec<Value>,
}

/// One diamond row as submitted by the form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiamondRequest {
    /// Number or numeric string
    #[serde(default)]
    pub carat: Option<Value>,
    #[serde(default)]
    pub clarity: Option<Value>,
    #[serde(default)]
    pub color: Option<Value>,
    #[serde(default)]
    pub cut: Option<Value>,
    #[serde(default)]
    pub certification: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

/// Query parameters for calculation history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub staff_id: Option<String>,
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    50
}
