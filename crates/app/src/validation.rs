//! Request payload coercion and identifier validation.
//!
//! Incoming payloads are loosely typed JSON. These helpers turn the numeric,
//! boolean and identifier fields into storage-ready values, and report a
//! [`ValidationError`] instead of storing `NaN` or silently dropping input.

use serde_json::Value;
use thiserror::Error;

use crate::object_ids::TypedObjectId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be a whole number")]
    NotAnInteger { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("Invalid {resource} ID")]
    InvalidIdentifier { resource: &'static str },
}

/// Parse a finite floating point number from a JSON number or numeric string.
///
/// # Errors
///
/// Returns [`ValidationError::NotANumber`] for any other input.
pub fn coerce_float(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|number| number.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

/// Parse a price, which must be a non-negative number.
///
/// # Errors
///
/// Returns an error when the value is not a number or is negative.
pub fn coerce_price(value: &Value) -> Result<f64, ValidationError> {
    let price = coerce_float("price", value)?;

    if price < 0.0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(price)
}

/// Parse a rating.
///
/// # Errors
///
/// Returns an error when the value is not a number.
pub fn coerce_rating(value: &Value) -> Result<f64, ValidationError> {
    coerce_float("rating", value)
}

/// Parse a stock quantity, which must be a non-negative whole number.
///
/// # Errors
///
/// Returns an error when the value is not a whole number or is negative.
pub fn coerce_quantity(value: &Value) -> Result<i64, ValidationError> {
    const FIELD: &str = "productQuantity";

    let quantity = match value {
        Value::Number(number) => match number.as_i64() {
            Some(quantity) => quantity,
            None => whole_number(number.as_f64()).ok_or(ValidationError::NotAnInteger {
                field: FIELD,
            })?,
        },
        Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_parse_error| ValidationError::NotAnInteger { field: FIELD })?,
        _ => return Err(ValidationError::NotANumber { field: FIELD }),
    };

    if quantity < 0 {
        return Err(ValidationError::Negative { field: FIELD });
    }

    Ok(quantity)
}

/// Only the JSON literal `true` counts as true; everything else is `false`.
#[must_use]
pub fn normalize_flag(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// Parse a path or query identifier into a typed object id.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIdentifier`] unless `raw` is 24 hex digits.
pub fn parse_object_id<T>(
    resource: &'static str,
    raw: &str,
) -> Result<TypedObjectId<T>, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_parse_error| ValidationError::InvalidIdentifier { resource })
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is checked to be integral and inside the i64 range first"
)]
fn whole_number(value: Option<f64>) -> Option<i64> {
    #[expect(
        clippy::cast_precision_loss,
        reason = "bounds only need to be approximately i64::MIN/MAX"
    )]
    let (min, max) = (i64::MIN as f64, i64::MAX as f64);

    value
        .filter(|number| number.fract() == 0.0 && *number >= min && *number < max)
        .map(|number| number as i64)
}
