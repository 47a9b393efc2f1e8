//! Domain models for diamond pricing.
//!
//! Categorical grades are closed enums; the only way to build one from caller
//! input is [`crate::pricing::tables::lookup`], which rejects unknown keys.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// GIA clarity grade, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clarity {
    Fl,
    If,
    Vvs1,
    Vvs2,
    Vs1,
    Vs2,
    Si1,
    Si2,
    I1,
}

/// Color grade, D (colorless) to K
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
}

/// Cut grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cut {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

/// Grading laboratory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Certification {
    Gia,
    Ags,
    Igi,
    Hrd,
    /// No certificate ("None" on the wire)
    Uncertified,
}

/// Which fields a request must carry.
///
/// `NonCertified` forces certification to [`Certification::Uncertified`] and
/// lets clarity, color and cut be omitted together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    #[default]
    Certified,
    NonCertified,
}

/// Clarity, color and cut of a graded stone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grades {
    pub clarity: Clarity,
    pub color: Color,
    pub cut: Cut,
}

/// A validated diamond ready for pricing
#[derive(Debug, Clone, PartialEq)]
pub struct DiamondDescriptor {
    pub carat: Decimal,
    /// `None` only for ungraded stones in non-certified mode
    pub grades: Option<Grades>,
    pub certification: Certification,
    pub quantity: u32,
}

impl DiamondDescriptor {
    /// Graded, single-unit descriptor
    pub fn graded(
        carat: Decimal,
        clarity: Clarity,
        color: Color,
        cut: Cut,
        certification: Certification,
    ) -> Self {
        Self {
            carat,
            grades: Some(Grades {
                clarity,
                color,
                cut,
            }),
            certification,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Output of the batch pricer
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// Sum of line totals, rounded to a whole currency unit
    pub total_price: Decimal,
    /// Unrounded line total (item price x quantity) per input diamond, in input order
    pub item_prices: Vec<Decimal>,
}

impl PricingResult {
    pub fn empty() -> Self {
        Self {
            total_price: Decimal::ZERO,
            item_prices: Vec::new(),
        }
    }
}

/// A priced diamond as kept in calculation history
#[derive(Debug, Clone, PartialEq)]
pub struct PricedDiamond {
    pub diamond: DiamondDescriptor,
    /// Unrounded line total
    pub line_total: Decimal,
}

/// One successful calculation, kept in the in-memory history
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Staff ID of the caller, or "anonymous"
    pub calculated_by: String,
    pub mode: PricingMode,
    pub items: Vec<PricedDiamond>,
    pub total_price: Decimal,
}

impl CalculationRecord {
    pub fn individual_prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.items.iter().map(|item| item.line_total)
    }
}
