//! # Fixed-Point Token Amounts
//!
//! Conversion between human readable decimal strings (`"0.5"`) and integer
//! base-unit amounts (`500000000000000000` at 18 decimals), matching the
//! contract SDK's `parseUnits` / `formatUnits`.
//!
//! Amounts are `u128`, which holds any value up to 10^38 base units. That is
//! the largest supported precision, and far more than any claim price needs.
//!
//! ```rust
//! use lib_core::units::{format_units, parse_units};
//!
//! let unit = parse_units("0.5", 18).unwrap();
//! assert_eq!(format_units(unit * 3, 18), "1.5");
//! ```

use thiserror::Error;

/// Highest precision representable in a `u128` amount.
pub const MAX_DECIMALS: u8 = 38;

/// Precision the SDK assumes when a currency reports none.
pub const DEFAULT_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("invalid decimal value: {0:?}")]
    InvalidDecimal(String),

    #[error("fractional component exceeds {decimals} decimals: {value:?}")]
    FractionTooLong { value: String, decimals: u8 },

    #[error("precision {0} exceeds the supported maximum of 38 decimals")]
    DecimalsTooLarge(u8),

    #[error("amount overflows 128 bits")]
    Overflow,
}

fn multiplier(decimals: u8) -> Result<u128, UnitsError> {
    if decimals > MAX_DECIMALS {
        return Err(UnitsError::DecimalsTooLarge(decimals));
    }
    Ok(10u128.pow(u32::from(decimals)))
}

/// Parse a non-negative decimal string into base units.
///
/// Accepts `"1"`, `"1.5"`, `".5"` and `"1."`. Trailing zeros in the fraction
/// are ignored before the precision check, so `"1.50"` parses at one decimal.
pub fn parse_units(value: &str, decimals: u8) -> Result<u128, UnitsError> {
    let invalid = || UnitsError::InvalidDecimal(value.to_string());
    let multiplier = multiplier(decimals)?;

    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (value, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > usize::from(decimals) {
        return Err(UnitsError::FractionTooLong {
            value: value.to_string(),
            decimals,
        });
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| UnitsError::Overflow)?
    };

    let fraction: u128 = if fraction.is_empty() {
        0
    } else {
        let padding = u32::from(decimals) - fraction.len() as u32;
        // At most 38 digits, always fits
        fraction.parse::<u128>().map_err(|_| invalid())? * 10u128.pow(padding)
    };

    whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(UnitsError::Overflow)
}

/// Format a base-unit amount as a decimal string.
///
/// The fraction keeps at least one digit (`"1.0"`), and is dropped entirely
/// at zero precision. Precision above [`MAX_DECIMALS`] is clamped.
pub fn format_units(amount: u128, decimals: u8) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if decimals == 0 {
        return amount.to_string();
    }

    let multiplier = 10u128.pow(u32::from(decimals));
    let whole = amount / multiplier;
    let fraction = format!(
        "{:0width$}",
        amount % multiplier,
        width = usize::from(decimals)
    );
    let fraction = match fraction.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    format!("{}.{}", whole, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETHER: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1", 18), Ok(ETHER));
        assert_eq!(parse_units("0.5", 18), Ok(ETHER / 2));
        assert_eq!(parse_units(".25", 2), Ok(25));
        assert_eq!(parse_units("3.", 0), Ok(3));
        assert_eq!(parse_units("0", 6), Ok(0));
    }

    #[test]
    fn test_parse_units_trailing_zeros_do_not_count_against_precision() {
        assert_eq!(parse_units("1.50", 1), Ok(15));
        assert_eq!(parse_units("2.000", 0), Ok(2));
    }

    #[test]
    fn test_parse_units_rejects_malformed() {
        assert!(matches!(parse_units("", 18), Err(UnitsError::InvalidDecimal(_))));
        assert!(matches!(parse_units(".", 18), Err(UnitsError::InvalidDecimal(_))));
        assert!(matches!(parse_units("-1", 18), Err(UnitsError::InvalidDecimal(_))));
        assert!(matches!(parse_units("1.2.3", 18), Err(UnitsError::InvalidDecimal(_))));
        assert!(matches!(parse_units("1e18", 18), Err(UnitsError::InvalidDecimal(_))));
        assert!(matches!(parse_units(" 1", 18), Err(UnitsError::InvalidDecimal(_))));
    }

    #[test]
    fn test_parse_units_fraction_too_long() {
        assert_eq!(
            parse_units("0.123", 2),
            Err(UnitsError::FractionTooLong {
                value: "0.123".to_string(),
                decimals: 2
            })
        );
    }

    #[test]
    fn test_parse_units_limits() {
        assert_eq!(parse_units("1", 39), Err(UnitsError::DecimalsTooLarge(39)));
        assert_eq!(parse_units("1000", 36), Err(UnitsError::Overflow));
        assert_eq!(
            parse_units("999999999999999999999999999999999999999999", 0),
            Err(UnitsError::Overflow)
        );
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(3 * ETHER / 2, 18), "1.5");
        assert_eq!(format_units(ETHER, 18), "1.0");
        assert_eq!(format_units(0, 18), "0.0");
        assert_eq!(format_units(1, 18), "0.000000000000000001");
        assert_eq!(format_units(1_250_000, 6), "1.25");
        assert_eq!(format_units(42, 0), "42");
    }

    #[test]
    fn test_half_ether_times_three() {
        let unit = parse_units("0.5", 18).unwrap();
        assert_eq!(format_units(unit * 3, 18), "1.5");
    }
}
