use crate::assessment::record::ImpactTier;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

// Items within ±15% of their category baseline count as typical. The bounds
// themselves fall inside the Average band.
const LOW_BOUND: Decimal = dec!(0.85);
const HIGH_BOUND: Decimal = dec!(1.15);

pub fn assess_tier(specific_factor: Decimal, baseline_factor: Decimal) -> ImpactTier {
    let ratio = specific_factor / baseline_factor;

    if ratio < LOW_BOUND {
        ImpactTier::Low
    } else if ratio > HIGH_BOUND {
        ImpactTier::High
    } else {
        ImpactTier::Average
    }
}

/// Manufacturing footprint in kg CO2e, rounded to two decimal places with
/// midpoints going away from zero.
pub fn footprint(weight_kg: Decimal, specific_factor: Decimal) -> Decimal {
    (weight_kg * specific_factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_ratios_count_as_average() {
        assert_eq!(assess_tier(dec!(0.85), dec!(1.0)), ImpactTier::Average);
        assert_eq!(assess_tier(dec!(1.15), dec!(1.0)), ImpactTier::Average);
        assert_eq!(assess_tier(dec!(17.0), dec!(20.0)), ImpactTier::Average);
    }

    #[test]
    fn below_the_band_is_low() {
        assert_eq!(assess_tier(dec!(7.5), dec!(12.0)), ImpactTier::Low);
    }

    #[test]
    fn above_the_band_is_high() {
        assert_eq!(assess_tier(dec!(18.0), dec!(15.5)), ImpactTier::High);
    }

    #[test]
    fn matching_the_baseline_is_average() {
        assert_eq!(assess_tier(dec!(25.0), dec!(25.0)), ImpactTier::Average);
    }

    #[test]
    fn footprint_rounds_midpoints_away_from_zero() {
        // 0.05 * 2.1 = 0.105: exact decimal arithmetic, so the midpoint
        // always rounds up, never down.
        assert_eq!(footprint(dec!(0.05), dec!(2.1)), dec!(0.11));
        assert_eq!(footprint(dec!(0.25), dec!(7.5)), dec!(1.88));
    }

    #[test]
    fn footprint_keeps_exact_products() {
        assert_eq!(footprint(dec!(2.0), dec!(18.0)), dec!(36.00));
        assert_eq!(footprint(dec!(0.2), dec!(25.0)), dec!(5.00));
    }
}
