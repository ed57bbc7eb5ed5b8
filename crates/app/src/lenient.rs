//! Tolerant deserializers for loosely typed stored documents.
//!
//! Documents written by other clients may hold `null` for absent fields or
//! doubles (including `NaN`) where an integer is expected. Reading them must
//! not fail the whole query.

use mongodb::bson::{Bson, DateTime};
use serde::{Deserialize, Deserializer};

/// Read `null` as the type's default.
///
/// # Errors
///
/// Returns an error when a non-null value has the wrong type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read any numeric value as `f64`; anything else becomes `0.0`.
///
/// # Errors
///
/// Returns an error only when the value cannot be read as BSON at all.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Bson::deserialize(deserializer)? {
        Bson::Double(value) => value,
        Bson::Int32(value) => f64::from(value),
        Bson::Int64(value) => int_to_float(value),
        Bson::String(value) => value.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Read any numeric value as `i64`, truncating doubles; `NaN`, infinities and
/// non-numeric values become `0`.
///
/// # Errors
///
/// Returns an error only when the value cannot be read as BSON at all.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Bson::deserialize(deserializer)? {
        Bson::Int32(value) => i64::from(value),
        Bson::Int64(value) => value,
        Bson::Double(value) if value.is_finite() => truncate(value),
        Bson::String(value) => value.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// Only a stored boolean `true` counts as `true`.
///
/// # Errors
///
/// Returns an error only when the value cannot be read as BSON at all.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Bson::deserialize(deserializer)?, Bson::Boolean(true)))
}

/// Read a stored date, falling back to the Unix epoch when it is missing or
/// not a date.
///
/// # Errors
///
/// Returns an error only when the value cannot be read as BSON at all.
pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Bson::deserialize(deserializer)? {
        Bson::DateTime(value) => value,
        _ => epoch(),
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "stored integers are prices and ratings well inside f64 precision"
)]
fn int_to_float(value: i64) -> f64 {
    value as f64
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "fractional quantities are truncated like parseInt; out of range values saturate"
)]
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Default for missing timestamps.
#[must_use]
pub fn epoch() -> DateTime {
    DateTime::from_millis(0)
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document};
    use serde::Deserialize;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "number")]
        price: f64,
        #[serde(default, deserialize_with = "integer")]
        quantity: i64,
        #[serde(default, deserialize_with = "flag")]
        in_stock: bool,
        #[serde(default = "epoch", deserialize_with = "timestamp")]
        created_at: DateTime,
    }

    #[test]
    fn nulls_and_missing_fields_become_defaults() -> TestResult {
        let loose: Loose = from_document(doc! {
            "name": null,
            "price": null,
            "in_stock": null,
        })?;

        assert_eq!(loose.name, "");
        assert!(loose.price.abs() < f64::EPSILON);
        assert_eq!(loose.quantity, 0);
        assert!(!loose.in_stock);
        assert_eq!(loose.created_at, epoch());

        Ok(())
    }

    #[test]
    fn numbers_are_read_across_bson_types() -> TestResult {
        let loose: Loose = from_document(doc! {
            "price": 12_i32,
            "quantity": 3.9_f64,
            "in_stock": true,
        })?;

        assert!((loose.price - 12.0).abs() < f64::EPSILON);
        assert_eq!(loose.quantity, 3);
        assert!(loose.in_stock);

        Ok(())
    }

    #[test]
    fn nan_quantity_reads_as_zero() -> TestResult {
        let loose: Loose = from_document(doc! { "quantity": f64::NAN, "price": "7.5" })?;

        assert_eq!(loose.quantity, 0);
        assert!((loose.price - 7.5).abs() < f64::EPSILON);

        Ok(())
    }
}
