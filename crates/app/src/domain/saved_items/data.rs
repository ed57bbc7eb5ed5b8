//! Saved Items Data

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::database::{CART_COLLECTION, WISHLIST_COLLECTION};

/// Which per-user list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SavedList {
    Cart,
    Wishlist,
}

impl SavedList {
    #[must_use]
    pub const fn collection_name(self) -> &'static str {
        match self {
            Self::Cart => CART_COLLECTION,
            Self::Wishlist => WISHLIST_COLLECTION,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
        }
    }
}

impl Display for SavedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// New Saved Item Data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedItem {
    pub product_name: String,
    pub price: f64,
    pub image: String,
    pub user_email: String,
}
