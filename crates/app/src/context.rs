//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::{
    auth::{AuthService, MongoAuthService},
    database::Db,
    domain::{
        products::{MongoProductsService, ProductsService},
        saved_items::{MongoSavedItemsService, SavedItemsService, SavedList},
        users::{MongoUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] mongodb::error::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub cart: Arc<dyn SavedItemsService>,
    pub wishlist: Arc<dyn SavedItemsService>,
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database handle.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            products: Arc::new(MongoProductsService::new(db)),
            cart: Arc::new(MongoSavedItemsService::new(db, SavedList::Cart)),
            wishlist: Arc::new(MongoSavedItemsService::new(db, SavedList::Wishlist)),
            users: Arc::new(MongoUsersService::new(db)),
            auth: Arc::new(MongoAuthService::new(db)),
        }
    }

    /// Connect to the database, ensure its indexes exist, and build the context.
    ///
    /// Index creation failures are logged and do not stop startup: a database
    /// already holding duplicate saved items cannot take the unique index until
    /// the duplicates are removed and `boutique-app db ensure-indexes` is run.
    /// Until then the service-level duplicate check still applies.
    ///
    /// The returned [`Db`] must be kept so it can be shut down on exit.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting fails.
    pub async fn connect(url: &str, database_name: &str) -> Result<(Self, Db), AppInitError> {
        let db = Db::connect(url, database_name)
            .await
            .map_err(AppInitError::Database)?;

        if let Err(source) = db.ensure_indexes().await {
            warn!("failed to create unique saved item indexes, continuing without them: {source}");
        }

        Ok((Self::from_db(&db), db))
    }

    /// Look up the service for the given saved item list.
    #[must_use]
    pub fn saved_items(&self, list: SavedList) -> &Arc<dyn SavedItemsService> {
        match list {
            SavedList::Cart => &self.cart,
            SavedList::Wishlist => &self.wishlist,
        }
    }
}
