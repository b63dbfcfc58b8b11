//! Decimal helpers for prices, salaries and revenue totals.
//!
//! CRITICAL: Never use floating-point for money calculations.

use rust_decimal::Decimal;

/// Number of fractional digits money amounts are stored and reported with.
pub const CURRENCY_SCALE: u32 = 2;

/// Pads `amount` to at least [`CURRENCY_SCALE`] fractional digits.
///
/// Never rounds: an amount with more digits is returned unchanged, so sums
/// stay exact. `0` becomes `0.00`.
#[must_use]
pub fn to_currency_scale(amount: Decimal) -> Decimal {
    if amount.scale() >= CURRENCY_SCALE {
        return amount;
    }
    let mut scaled = amount;
    scaled.rescale(CURRENCY_SCALE);
    scaled
}

/// Integer digits a stored amount may have (`NUMERIC(12, 2)` columns).
pub const AMOUNT_INTEGER_DIGITS: u32 = 10;

/// Returns true if `amount` has no more than [`CURRENCY_SCALE`] significant
/// fractional digits, so storing it never rounds. `10.50` fits, `0.001` does not.
#[must_use]
pub fn fits_currency_scale(amount: &Decimal) -> bool {
    amount.normalize().scale() <= CURRENCY_SCALE
}

/// Returns true if the integer part of `amount` fits in
/// [`AMOUNT_INTEGER_DIGITS`] digits.
#[must_use]
pub fn fits_amount_column(amount: &Decimal) -> bool {
    amount.abs() < Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS))
}

/// Returns true if the amount is strictly greater than zero.
#[must_use]
pub fn is_positive_amount(amount: &Decimal) -> bool {
    amount.is_sign_positive() && !amount.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_is_padded() {
        assert_eq!(to_currency_scale(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_whole_amount_is_padded() {
        assert_eq!(to_currency_scale(dec!(100)).to_string(), "100.00");
    }

    #[test]
    fn test_extra_digits_are_kept() {
        assert_eq!(to_currency_scale(dec!(10.125)).to_string(), "10.125");
        assert_eq!(to_currency_scale(dec!(10.5)).to_string(), "10.50");
    }

    #[test]
    fn test_is_positive_amount() {
        assert!(is_positive_amount(&dec!(0.01)));
        assert!(!is_positive_amount(&Decimal::ZERO));
        assert!(!is_positive_amount(&dec!(-5)));
    }

    #[test]
    fn test_fits_currency_scale() {
        assert!(fits_currency_scale(&dec!(10.50)));
        assert!(fits_currency_scale(&dec!(10.500)));
        assert!(!fits_currency_scale(&dec!(0.001)));
        assert!(!fits_currency_scale(&dec!(10.125)));
    }

    #[test]
    fn test_fits_amount_column() {
        assert!(fits_amount_column(&dec!(9999999999.99)));
        assert!(!fits_amount_column(&dec!(10000000000)));
        assert!(!fits_amount_column(&dec!(100000000000)));
    }
}
