//! Fixed-point encoding of conversion rates.

use crate::constants::CONVERSION_RATE_DENOM;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::str::FromStr;

/// Rates below this encode to zero.
///
/// Far below `1 / CONVERSION_RATE_DENOM`, and keeps the decimal expansion of any rate within
/// [`Decimal`] precision.
const MIN_ENCODABLE_RATE: f64 = 1e-7;

/// Translates a float rate (eg. `0.1`) to a numerator over [`CONVERSION_RATE_DENOM`]
/// (eg. `100_000`), as used by `FeeOracleV2`.
///
/// The rate is taken at its shortest decimal representation and multiplied exactly, then
/// truncated. Negative and `NaN` rates encode to `0`, rates too large for a `u64` numerator
/// saturate at [`u64::MAX`].
pub fn rate_to_numerator(rate: f64) -> u64 {
    if rate.is_nan() || rate < MIN_ENCODABLE_RATE {
        return 0;
    }

    // `f64` display is the shortest representation that roundtrips, eg. `0.1` and not
    // `0.1000000000000000055511151231257827`.
    let Ok(rate) = Decimal::from_str(&rate.to_string()) else {
        return u64::MAX;
    };

    rate.checked_mul(Decimal::from(CONVERSION_RATE_DENOM))
        .and_then(|numerator| numerator.trunc().to_u64())
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_values() {
        assert_eq!(rate_to_numerator(0.1), 100_000);
        assert_eq!(rate_to_numerator(1.0), 1_000_000);
        assert_eq!(rate_to_numerator(0.0), 0);
    }

    #[test]
    fn fallback_pegs() {
        assert_eq!(rate_to_numerator(0.0025), 2_500);
        assert_eq!(rate_to_numerator(400.0), 400_000_000);
    }

    #[test]
    fn truncates() {
        assert_eq!(rate_to_numerator(1.0 / 3.0), 333_333);
        assert_eq!(rate_to_numerator(2.0 / 3.0), 666_666);
        assert_eq!(rate_to_numerator(0.9999999), 999_999);
        assert_eq!(rate_to_numerator(1.2345678), 1_234_567);
    }

    #[test]
    fn no_binary_rounding_loss() {
        // binary expansions of these are slightly below the decimal value
        assert_eq!(rate_to_numerator(0.3), 300_000);
        assert_eq!(rate_to_numerator(0.7), 700_000);
        assert_eq!(rate_to_numerator(1.1), 1_100_000);
        assert_eq!(rate_to_numerator(0.000003), 3);
    }

    #[test]
    fn denominator_boundary() {
        assert_eq!(rate_to_numerator(0.000001), 1);
        assert_eq!(rate_to_numerator(0.0000019), 1);
        assert_eq!(rate_to_numerator(0.0000009), 0);
        assert_eq!(rate_to_numerator(1e-9), 0);
        assert_eq!(rate_to_numerator(f64::MIN_POSITIVE), 0);
    }

    #[test]
    fn invalid_rates() {
        assert_eq!(rate_to_numerator(-1.0), 0);
        assert_eq!(rate_to_numerator(f64::NAN), 0);
        assert_eq!(rate_to_numerator(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn saturates() {
        assert_eq!(rate_to_numerator(1e13), 10_000_000_000_000_000_000);
        assert_eq!(rate_to_numerator(2e13), u64::MAX);
        assert_eq!(rate_to_numerator(1e30), u64::MAX);
        assert_eq!(rate_to_numerator(f64::MAX), u64::MAX);
        assert_eq!(rate_to_numerator(f64::INFINITY), u64::MAX);
    }

    #[test]
    fn large_rates() {
        assert_eq!(rate_to_numerator(123_456.789), 123_456_789_000);
        assert_eq!(rate_to_numerator(18_446_744_073_709.5), 18_446_744_073_709_500_000);
    }
}
