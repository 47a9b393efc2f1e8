//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{DiamondDescriptor, PricingResult};
use super::services::PricingError;
use super::tables::combined_multiplier;

/// Reference base price per carat, in whole currency units
pub const BASE_PRICE_PER_CARAT: Decimal = dec!(23750);

/// Round to specified decimal places, halves away from zero.
///
/// Totals are never negative, so this is plain round-half-up.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use diamond_estimator::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(350122.5), 0), dec!(350123));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Price of a single stone, before quantity. Never rounded.
///
/// `base_price_per_carat x carat x clarity x color x cut x certification`
pub fn price_item(base_price_per_carat: Decimal, diamond: &DiamondDescriptor) -> Decimal {
    base_price_per_carat * diamond.carat * combined_multiplier(diamond)
}

/// Price a batch of validated diamonds.
///
/// `item_prices[i]` is the unrounded line total (item price x quantity) of
/// `diamonds[i]`; only the aggregate total is rounded, to a whole unit.
pub fn price_batch(
    base_price_per_carat: Decimal,
    diamonds: &[DiamondDescriptor],
) -> Result<PricingResult, PricingError> {
    if diamonds.is_empty() {
        return Ok(PricingResult::empty());
    }

    let mut total = Decimal::ZERO;
    let mut item_prices = Vec::with_capacity(diamonds.len());

    for (index, diamond) in diamonds.iter().enumerate() {
        let line_total = price_item(base_price_per_carat, diamond)
            .checked_mul(Decimal::from(diamond.quantity))
            .ok_or_else(|| PricingError::Computation {
                message: format!("line total overflow for diamond at index {}", index),
            })?;

        total = total
            .checked_add(line_total)
            .ok_or_else(|| PricingError::Computation {
                message: format!("batch total overflow at index {}", index),
            })?;

        item_prices.push(line_total);
    }

    Ok(PricingResult {
        total_price: round_money(total, 0),
        item_prices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Certification, Clarity, Color, Cut};

    fn reference_diamond() -> DiamondDescriptor {
        DiamondDescriptor::graded(
            dec!(1.0),
            Clarity::Vs1,
            Color::D,
            Cut::Excellent,
            Certification::Gia,
        )
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(5));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.3));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(116707.49), 0), dec!(116707));
        assert_eq!(round_money(dec!(0), 0), dec!(0));
    }

    // ==================== price_item tests ====================

    #[test]
    fn test_price_item_reference_scenario() {
        // 23750 x 1.0 x 1.4 x 1.8 x 1.5 x 1.3
        assert_eq!(
            price_item(BASE_PRICE_PER_CARAT, &reference_diamond()),
            dec!(116707.5)
        );
    }

    #[test]
    fn test_price_item_is_not_rounded() {
        let diamond = DiamondDescriptor::graded(
            dec!(0.33),
            Clarity::Si2,
            Color::K,
            Cut::Poor,
            Certification::Ags,
        );
        // 23750 x 0.33 x 1.1 x 0.9 x 0.7 x 1.25
        assert_eq!(price_item(BASE_PRICE_PER_CARAT, &diamond), dec!(6789.234375));
    }

    #[test]
    fn test_price_item_strictly_positive() {
        let diamond = DiamondDescriptor::graded(
            dec!(0.01),
            Clarity::I1,
            Color::K,
            Cut::Poor,
            Certification::Uncertified,
        );
        assert!(price_item(BASE_PRICE_PER_CARAT, &diamond) > Decimal::ZERO);
    }

    #[test]
    fn test_price_item_monotonic_in_carat() {
        let mut previous = Decimal::ZERO;
        for carat in [dec!(0.1), dec!(0.5), dec!(0.51), dec!(1), dec!(2.5), dec!(50)] {
            let diamond = DiamondDescriptor {
                carat,
                ..reference_diamond()
            };
            let price = price_item(BASE_PRICE_PER_CARAT, &diamond);
            assert!(price > previous, "carat {} priced {}", carat, price);
            previous = price;
        }
    }

    #[test]
    fn test_price_item_ungraded() {
        let diamond = DiamondDescriptor {
            carat: dec!(2),
            grades: None,
            certification: Certification::Uncertified,
            quantity: 1,
        };
        assert_eq!(price_item(BASE_PRICE_PER_CARAT, &diamond), dec!(47500));
    }

    #[test]
    fn test_price_item_custom_base() {
        assert_eq!(price_item(dec!(10000), &reference_diamond()), dec!(49140));
    }

    // ==================== price_batch tests ====================

    #[test]
    fn test_price_batch_empty() {
        let result = price_batch(BASE_PRICE_PER_CARAT, &[]).unwrap();
        assert_eq!(result.total_price, dec!(0));
        assert!(result.item_prices.is_empty());
    }

    #[test]
    fn test_price_batch_two_reference_items() {
        let diamonds = vec![reference_diamond(), reference_diamond()];
        let result = price_batch(BASE_PRICE_PER_CARAT, &diamonds).unwrap();

        // 116707.5 x 2
        assert_eq!(result.total_price, dec!(233415));
        assert_eq!(result.item_prices, vec![dec!(116707.5), dec!(116707.5)]);
    }

    #[test]
    fn test_price_batch_preserves_order() {
        let small = DiamondDescriptor {
            carat: dec!(0.5),
            ..reference_diamond()
        };
        let diamonds = vec![reference_diamond(), small];
        let result = price_batch(BASE_PRICE_PER_CARAT, &diamonds).unwrap();

        assert_eq!(result.item_prices.len(), 2);
        assert_eq!(result.item_prices[0], dec!(116707.5));
        assert_eq!(result.item_prices[1], dec!(58353.75));
        assert_eq!(result.total_price, dec!(175061)); // 175061.25
    }

    #[test]
    fn test_price_batch_quantity_scaling() {
        let single = price_batch(BASE_PRICE_PER_CARAT, &[reference_diamond().with_quantity(3)])
            .unwrap();
        let doubled = price_batch(BASE_PRICE_PER_CARAT, &[reference_diamond().with_quantity(6)])
            .unwrap();

        assert_eq!(doubled.item_prices[0], single.item_prices[0] * dec!(2));
        assert_eq!(single.item_prices[0], dec!(350122.5));
        assert_eq!(single.total_price, dec!(350123)); // half up
        assert_eq!(doubled.total_price, dec!(700245));
    }

    #[test]
    fn test_price_batch_total_matches_rounded_sum() {
        let diamonds = vec![
            reference_diamond().with_quantity(2),
            DiamondDescriptor::graded(
                dec!(0.73),
                Clarity::Vvs2,
                Color::G,
                Cut::VeryGood,
                Certification::Igi,
            ),
            DiamondDescriptor {
                carat: dec!(1.2),
                grades: None,
                certification: Certification::Uncertified,
                quantity: 5,
            },
        ];
        let result = price_batch(BASE_PRICE_PER_CARAT, &diamonds).unwrap();

        let sum: Decimal = result.item_prices.iter().copied().sum();
        assert_eq!(result.total_price, round_money(sum, 0));
        assert_eq!(result.item_prices.len(), diamonds.len());
    }
}
