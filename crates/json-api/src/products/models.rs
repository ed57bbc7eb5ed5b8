//! Product response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use boutique_app::domain::products::records::ProductRecord;

use crate::timestamps::to_rfc3339;

/// Product Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product ID
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub image: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    /// Discount, stored as given on creation
    pub discount: Value,
    pub rating: f64,
    pub details: String,
    pub admin_email: String,
    pub is_stock: bool,
    pub product_quantity: i64,
    pub is_discount: bool,
    /// Creation time (RFC 3339)
    pub created_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.to_hex(),
            product_name: product.product_name,
            image: product.image,
            category: product.category,
            subcategory: product.subcategory,
            price: product.price,
            discount: product.discount.into_relaxed_extjson(),
            rating: product.rating,
            details: product.details,
            admin_email: product.admin_email,
            is_stock: product.is_stock,
            product_quantity: product.product_quantity,
            is_discount: product.is_discount,
            created_at: to_rfc3339(product.created_at),
        }
    }
}
