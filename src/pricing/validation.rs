//! Request validation.
//!
//! Turns raw request rows into [`DiamondDescriptor`]s. The whole batch is
//! rejected on the first bad row so the pricer never sees partial input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use serde_json::Value;

use super::models::{Certification, Clarity, Color, Cut, DiamondDescriptor, Grades, PricingMode};
use super::requests::DiamondRequest;
use super::tables::{self, Attribute};

/// Largest carat weight accepted
pub const MAX_CARAT: Decimal = dec!(50);

/// A diamond failed structural or domain checks.
///
/// `index` is the zero-based position of the offending diamond, or `None`
/// when the batch as a whole is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.index, .reason))]
pub struct ValidationError {
    pub index: Option<usize>,
    pub reason: String,
}

fn describe(index: &Option<usize>, reason: &str) -> String {
    match index {
        Some(index) => format!("diamond at index {} is invalid: {}", index, reason),
        None => reason.to_string(),
    }
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            index: None,
            reason: reason.into(),
        }
    }

    /// Attach the position of the diamond that failed
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Validate a whole batch, returning descriptors in input order.
pub fn validate_batch(
    diamonds: &[Value],
    mode: PricingMode,
    max_batch_size: usize,
) -> Result<Vec<DiamondDescriptor>, ValidationError> {
    if diamonds.len() > max_batch_size {
        return Err(ValidationError::new(format!(
            "batch contains {} diamonds; at most {} are allowed",
            diamonds.len(),
            max_batch_size
        )));
    }

    diamonds
        .iter()
        .enumerate()
        .map(|(index, row)| {
            read_row(row)
                .and_then(|diamond| validate_diamond(&diamond, mode))
                .map_err(|e| e.at(index))
        })
        .collect()
}

/// Rows must be JSON objects; every field inside is optional at this stage.
fn read_row(row: &Value) -> Result<DiamondRequest, ValidationError> {
    if !row.is_object() {
        return Err(ValidationError::new(format!(
            "diamond must be an object, got {}",
            row
        )));
    }
    DiamondRequest::deserialize(row).map_err(|e| ValidationError::new(e.to_string()))
}

/// Validate one row without index information
pub fn validate_diamond(
    diamond: &DiamondRequest,
    mode: PricingMode,
) -> Result<DiamondDescriptor, ValidationError> {
    let carat = parse_carat(diamond.carat.as_ref())?;

    let (grades, certification) = match mode {
        PricingMode::Certified => {
            let grades = Grades {
                clarity: required::<Clarity>(diamond.clarity.as_ref())?,
                color: required::<Color>(diamond.color.as_ref())?,
                cut: required::<Cut>(diamond.cut.as_ref())?,
            };
            let certification = required::<Certification>(diamond.certification.as_ref())?;
            (Some(grades), certification)
        }
        PricingMode::NonCertified => {
            let grades = match (
                diamond.clarity.as_ref(),
                diamond.color.as_ref(),
                diamond.cut.as_ref(),
            ) {
                (None, None, None) => None,
                (Some(clarity), Some(color), Some(cut)) => Some(Grades {
                    clarity: attribute(clarity)?,
                    color: attribute(color)?,
                    cut: attribute(cut)?,
                }),
                _ => {
                    return Err(ValidationError::new(
                        "clarity, color and cut must be given together in non-certified mode",
                    ))
                }
            };
            (grades, Certification::Uncertified)
        }
    };

    let quantity = parse_quantity(diamond.quantity.as_ref())?;

    Ok(DiamondDescriptor {
        carat,
        grades,
        certification,
        quantity,
    })
}

fn required<A: Attribute>(value: Option<&Value>) -> Result<A, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new(format!("{} is required", A::FIELD)))?;
    attribute(value)
}

fn attribute<A: Attribute>(value: &Value) -> Result<A, ValidationError> {
    let key = value.as_str().ok_or_else(|| {
        ValidationError::new(format!("{} must be a string, got {}", A::FIELD, value))
    })?;
    tables::lookup(key)
}

/// Carat must be a positive finite number no larger than [`MAX_CARAT`].
/// Numeric strings are accepted since form inputs often arrive as text.
fn parse_carat(value: Option<&Value>) -> Result<Decimal, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new("carat is required"))?;

    let carat = match value {
        Value::Number(n) => n.as_f64().and_then(|f| Decimal::try_from(f).ok()),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
    .ok_or_else(|| ValidationError::new(format!("carat must be a finite number, got {}", value)))?;

    if carat <= Decimal::ZERO {
        return Err(ValidationError::new(format!(
            "carat must be greater than 0, got {}",
            carat
        )));
    }
    if carat > MAX_CARAT {
        return Err(ValidationError::new(format!(
            "carat must be at most {}, got {}",
            MAX_CARAT, carat
        )));
    }

    Ok(carat)
}

/// Absent quantity means one stone.
fn parse_quantity(value: Option<&Value>) -> Result<u32, ValidationError> {
    let Some(value) = value else {
        return Ok(1);
    };

    let quantity = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    quantity
        .filter(|q| *q >= 1)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or_else(|| {
            ValidationError::new(format!("quantity must be a positive integer, got {}", value))
        })
}
