//! Attribute multiplier tables.
//!
//! Each categorical attribute maps exhaustively to a positive multiplier.
//! Parsing a raw key is the only fallible step; an unknown key is a
//! [`ValidationError`], never a default multiplier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{Certification, Clarity, Color, Cut, DiamondDescriptor};
use super::validation::ValidationError;

/// A categorical diamond attribute with a fixed key set
pub trait Attribute: Copy + Sized + 'static {
    /// Field name used in error messages
    const FIELD: &'static str;
    /// Every member, in grade order
    const ALL: &'static [Self];

    /// Wire label, e.g. `"VVS1"` or `"Very Good"`
    fn label(self) -> &'static str;

    fn multiplier(self) -> Decimal;
}

/// Resolve a raw key into an attribute. Matching is exact and case-sensitive.
pub fn lookup<A: Attribute>(key: &str) -> Result<A, ValidationError> {
    A::ALL
        .iter()
        .copied()
        .find(|member| member.label() == key)
        .ok_or_else(|| {
            let expected: Vec<&str> = A::ALL.iter().map(|m| m.label()).collect();
            ValidationError::new(format!(
                "unknown {} '{}'; expected one of {}",
                A::FIELD,
                key,
                expected.join(", ")
            ))
        })
}

/// Multiplier for a raw key, failing on anything outside the table
pub fn multiplier_for<A: Attribute>(key: &str) -> Result<Decimal, ValidationError> {
    lookup::<A>(key).map(A::multiplier)
}

/// Product of all attribute multipliers for one diamond.
///
/// Ungraded stones contribute 1 for clarity, color and cut.
pub fn combined_multiplier(diamond: &DiamondDescriptor) -> Decimal {
    let grade = diamond
        .grades
        .map(|g| g.clarity.multiplier() * g.color.multiplier() * g.cut.multiplier())
        .unwrap_or(Decimal::ONE);
    grade * diamond.certification.multiplier()
}

impl Attribute for Clarity {
    const FIELD: &'static str = "clarity";
    const ALL: &'static [Self] = &[
        Clarity::Fl,
        Clarity::If,
        Clarity::Vvs1,
        Clarity::Vvs2,
        Clarity::Vs1,
        Clarity::Vs2,
        Clarity::Si1,
        Clarity::Si2,
        Clarity::I1,
    ];

    fn label(self) -> &'static str {
        match self {
            Clarity::Fl => "FL",
            Clarity::If => "IF",
            Clarity::Vvs1 => "VVS1",
            Clarity::Vvs2 => "VVS2",
            Clarity::Vs1 => "VS1",
            Clarity::Vs2 => "VS2",
            Clarity::Si1 => "SI1",
            Clarity::Si2 => "SI2",
            Clarity::I1 => "I1",
        }
    }

    fn multiplier(self) -> Decimal {
        match self {
            Clarity::Fl => dec!(2.0),
            Clarity::If => dec!(1.8),
            Clarity::Vvs1 => dec!(1.6),
            Clarity::Vvs2 => dec!(1.5),
            Clarity::Vs1 => dec!(1.4),
            Clarity::Vs2 => dec!(1.3),
            Clarity::Si1 => dec!(1.2),
            Clarity::Si2 => dec!(1.1),
            Clarity::I1 => dec!(0.9),
        }
    }
}

impl Attribute for Color {
    const FIELD: &'static str = "color";
    const ALL: &'static [Self] = &[
        Color::D,
        Color::E,
        Color::F,
        Color::G,
        Color::H,
        Color::I,
        Color::J,
        Color::K,
    ];

    fn label(self) -> &'static str {
        match self {
            Color::D => "D",
            Color::E => "E",
            Color::F => "F",
            Color::G => "G",
            Color::H => "H",
            Color::I => "I",
            Color::J => "J",
            Color::K => "K",
        }
    }

    fn multiplier(self) -> Decimal {
        match self {
            Color::D => dec!(1.8),
            Color::E => dec!(1.6),
            Color::F => dec!(1.4),
            Color::G => dec!(1.3),
            Color::H => dec!(1.2),
            Color::I => dec!(1.1),
            Color::J => dec!(1.0),
            Color::K => dec!(0.9),
        }
    }
}

impl Attribute for Cut {
    const FIELD: &'static str = "cut";
    const ALL: &'static [Self] = &[Cut::Excellent, Cut::VeryGood, Cut::Good, Cut::Fair, Cut::Poor];

    fn label(self) -> &'static str {
        match self {
            Cut::Excellent => "Excellent",
            Cut::VeryGood => "Very Good",
            Cut::Good => "Good",
            Cut::Fair => "Fair",
            Cut::Poor => "Poor",
        }
    }

    fn multiplier(self) -> Decimal {
        match self {
            Cut::Excellent => dec!(1.5),
            Cut::VeryGood => dec!(1.3),
            Cut::Good => dec!(1.1),
            Cut::Fair => dec!(0.9),
            Cut::Poor => dec!(0.7),
        }
    }
}

impl Attribute for Certification {
    const FIELD: &'static str = "certification";
    const ALL: &'static [Self] = &[
        Certification::Gia,
        Certification::Ags,
        Certification::Igi,
        Certification::Hrd,
        Certification::Uncertified,
    ];

    fn label(self) -> &'static str {
        match self {
            Certification::Gia => "GIA",
            Certification::Ags => "AGS",
            Certification::Igi => "IGI",
            Certification::Hrd => "HRD",
            Certification::Uncertified => "None",
        }
    }

    fn multiplier(self) -> Decimal {
        match self {
            Certification::Gia => dec!(1.3),
            Certification::Ags => dec!(1.25),
            Certification::Igi => dec!(1.1),
            Certification::Hrd => dec!(1.2),
            Certification::Uncertified => dec!(1.0),
        }
    }
}
