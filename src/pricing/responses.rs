//! Response DTOs for pricing API endpoints.
//!
//! Prices go out as JSON numbers; conversion from `Decimal` is checked and
//! surfaces as a computation error if a value cannot be represented.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use super::models::{CalculationRecord, PricedDiamond, PricingMode};
use super::services::PricingError;
use super::tables::Attribute;

fn to_number(amount: Decimal) -> Result<f64, PricingError> {
    amount.to_f64().ok_or_else(|| PricingError::Computation {
        message: format!("{} cannot be represented as a JSON number", amount),
    })
}

/// Response for a price calculation
#[derive(Debug, Serialize)]
pub struct CalculatePriceResponse {
    pub calculation_id: Uuid,
    pub total_price: f64,
    pub individual_prices: Vec<f64>,
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<&CalculationRecord> for CalculatePriceResponse {
    type Error = PricingError;

    fn try_from(record: &CalculationRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            calculation_id: record.id,
            total_price: to_number(record.total_price)?,
            individual_prices: record
                .individual_prices()
                .map(to_number)
                .collect::<Result<_, _>>()?,
            timestamp: record.timestamp,
        })
    }
}

/// A priced diamond in a history entry
#[derive(Debug, Serialize)]
pub struct HistoryItemResponse {
    pub carat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarity: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut: Option<&'static str>,
    pub certification: &'static str,
    pub quantity: u32,
    pub price: f64,
}

impl TryFrom<&PricedDiamond> for HistoryItemResponse {
    type Error = PricingError;

    fn try_from(item: &PricedDiamond) -> Result<Self, Self::Error> {
        let grades = item.diamond.grades;
        Ok(Self {
            carat: to_number(item.diamond.carat)?,
            clarity: grades.map(|g| g.clarity.label()),
            color: grades.map(|g| g.color.label()),
            cut: grades.map(|g| g.cut.label()),
            certification: item.diamond.certification.label(),
            quantity: item.diamond.quantity,
            price: to_number(item.line_total)?,
        })
    }
}

/// One calculation history entry
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub calculation_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub calculated_by: String,
    pub mode: PricingMode,
    pub total_price: f64,
    pub items: Vec<HistoryItemResponse>,
}

impl TryFrom<&CalculationRecord> for HistoryEntryResponse {
    type Error = PricingError;

    fn try_from(record: &CalculationRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            calculation_id: record.id,
            timestamp: record.timestamp,
            calculated_by: record.calculated_by.clone(),
            mode: record.mode,
            total_price: to_number(record.total_price)?,
            items: record
                .items
                .iter()
                .map(HistoryItemResponse::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Error body for every failed API call
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Certification, Clarity, Color, Cut, DiamondDescriptor};
    use rust_decimal_macros::dec;

    fn record() -> CalculationRecord {
        CalculationRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            calculated_by: "S-7".to_string(),
            mode: PricingMode::Certified,
            items: vec![
                PricedDiamond {
                    diamond: DiamondDescriptor::graded(
                        dec!(1.0),
                        Clarity::Vs1,
                        Color::D,
                        Cut::VeryGood,
                        Certification::Uncertified,
                    ),
                    line_total: dec!(77805),
                },
                PricedDiamond {
                    diamond: DiamondDescriptor {
                        carat: dec!(0.25),
                        grades: None,
                        certification: Certification::Uncertified,
                        quantity: 4,
                    },
                    line_total: dec!(23750),
                },
            ],
            total_price: dec!(101555),
        }
    }

    #[test]
    fn test_calculate_price_response_json() {
        let record = record();
        let response = CalculatePriceResponse::try_from(&record).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["total_price"], serde_json::json!(101555.0));
        assert_eq!(json["individual_prices"], serde_json::json!([77805.0, 23750.0]));
        assert_eq!(json["calculation_id"], serde_json::json!(record.id.to_string()));
    }

    #[test]
    fn test_history_entry_uses_wire_labels() {
        let entry = HistoryEntryResponse::try_from(&record()).unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        let graded = &json["items"][0];
        assert_eq!(graded["clarity"], "VS1");
        assert_eq!(graded["cut"], "Very Good");
        assert_eq!(graded["certification"], "None");

        let ungraded = &json["items"][1];
        assert!(ungraded.get("clarity").is_none());
        assert_eq!(ungraded["quantity"], 4);
        assert_eq!(ungraded["carat"], serde_json::json!(0.25));
        assert_eq!(json["mode"], "certified");
    }

    #[test]
    fn test_error_response_omits_missing_index() {
        let body = ErrorResponse {
            detail: "bad".to_string(),
            error_type: "bad_request",
            index: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("index").is_none());
    }
}
