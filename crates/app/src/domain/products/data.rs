//! Products Data

use mongodb::bson::Bson;
use serde::Serialize;

/// New Product Data
///
/// Numeric and boolean fields are already coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub image: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    pub discount: Bson,
    pub rating: f64,
    pub details: String,
    pub admin_email: String,
    pub is_stock: bool,
    pub product_quantity: i64,
    pub is_discount: bool,
}

/// Product Update Data
///
/// Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_discount: Option<bool>,
}

impl ProductUpdate {
    /// Whether the update would not touch any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
