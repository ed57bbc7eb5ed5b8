//! Product Records

use mongodb::bson::{Bson, DateTime};
use serde::{Deserialize, Serialize};

use crate::{domain::products::data::NewProduct, lenient, object_ids::TypedObjectId};

/// Product ID
pub type ProductId = TypedObjectId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub subcategory: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default)]
    pub discount: Bson,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub details: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub admin_email: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_stock: bool,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub product_quantity: i64,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_discount: bool,
    #[serde(default = "lenient::epoch", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime,
}

impl ProductRecord {
    #[must_use]
    pub(crate) fn from_new(id: ProductId, product: NewProduct, created_at: DateTime) -> Self {
        Self {
            id,
            product_name: product.product_name,
            image: product.image,
            category: product.category,
            subcategory: product.subcategory,
            price: product.price,
            discount: product.discount,
            rating: product.rating,
            details: product.details,
            admin_email: product.admin_email,
            is_stock: product.is_stock,
            product_quantity: product.product_quantity,
            is_discount: product.is_discount,
            created_at,
        }
    }
}
