//! Request validation helpers.

use rust_decimal::Decimal;
use transco_shared::types::money::{
    AMOUNT_INTEGER_DIGITS, CURRENCY_SCALE, fits_amount_column, fits_currency_scale,
    is_positive_amount,
};
use validator::{Validate, ValidationError};

use crate::error::ApiError;

/// Rejects strings that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Rejects zero and negative amounts, and amounts a money column would round
/// or could not hold.
pub fn positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if !is_positive_amount(value) {
        return Err(ValidationError::new("positive").with_message("must be positive".into()));
    }
    if !fits_currency_scale(value) {
        return Err(ValidationError::new("scale")
            .with_message(format!("must have at most {CURRENCY_SCALE} decimal places").into()));
    }
    if !fits_amount_column(value) {
        return Err(ValidationError::new("range").with_message(
            format!("must have at most {AMOUNT_INTEGER_DIGITS} integer digits").into(),
        ));
    }
    Ok(())
}

/// Validates a request payload, mapping failures to a 400.
pub fn validate<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|errors| ApiError::validation(errors.to_string()))
}
