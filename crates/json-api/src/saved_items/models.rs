//! Saved item request and response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use boutique_app::{
    domain::saved_items::{data::NewSavedItem, records::SavedItemRecord},
    validation::coerce_price,
};

use crate::{errors::ApiError, timestamps::to_rfc3339};

/// Add Saved Item Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct AddSavedItemRequest {
    pub product_name: Option<String>,
    /// Number or numeric string
    pub price: Value,
    pub image: Option<String>,
    pub user_email: Option<String>,
}

impl TryFrom<AddSavedItemRequest> for NewSavedItem {
    type Error = ApiError;

    fn try_from(request: AddSavedItemRequest) -> Result<Self, Self::Error> {
        Ok(NewSavedItem {
            price: coerce_price(&request.price)?,
            product_name: request.product_name.unwrap_or_default(),
            image: request.image.unwrap_or_default(),
            user_email: request.user_email.unwrap_or_default(),
        })
    }
}

/// Saved Item Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavedItemAddedResponse {
    pub message: String,
    /// Created item ID
    pub item_id: String,
}

/// Saved Item Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavedItemResponse {
    /// Item ID
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub price: f64,
    pub image: String,
    pub user_email: String,
    /// Creation time (RFC 3339)
    pub created_at: String,
}

impl From<SavedItemRecord> for SavedItemResponse {
    fn from(item: SavedItemRecord) -> Self {
        Self {
            id: item.id.to_hex(),
            product_name: item.product_name,
            price: item.price,
            image: item.image,
            user_email: item.user_email,
            created_at: to_rfc3339(item.created_at),
        }
    }
}
