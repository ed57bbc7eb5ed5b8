//! Saved Item Records

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::{domain::saved_items::data::NewSavedItem, lenient, object_ids::TypedObjectId};

/// Saved Item ID
pub type SavedItemId = TypedObjectId<SavedItemRecord>;

/// Saved Item Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItemRecord {
    #[serde(rename = "_id")]
    pub id: SavedItemId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub user_email: String,
    #[serde(default = "lenient::epoch", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime,
}

impl SavedItemRecord {
    #[must_use]
    pub(crate) fn from_new(id: SavedItemId, item: NewSavedItem, created_at: DateTime) -> Self {
        Self {
            id,
            product_name: item.product_name,
            price: item.price,
            image: item.image,
            user_email: item.user_email,
            created_at,
        }
    }
}
