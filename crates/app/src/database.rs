//! Database connection management

use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::doc,
    error::{Error, ErrorKind, WriteFailure},
    options::IndexOptions,
};
use tracing::info;

/// Products collection name.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Cart items collection name.
pub const CART_COLLECTION: &str = "cart";

/// Wishlist items collection name.
pub const WISHLIST_COLLECTION: &str = "wishlist";

/// Users collection name.
pub const USERS_COLLECTION: &str = "users";

/// Server error code reported for unique index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Handle to the shared `MongoDB` client and application database.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    client: Client,
    database: Database,
}

impl Db {
    #[must_use]
    pub fn new(client: Client, database_name: &str) -> Self {
        let database = client.database(database_name);

        Self { client, database }
    }

    /// Connect to `MongoDB` and verify the deployment is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is invalid or the server cannot be pinged.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = Self::new(client, database_name);

        db.ping().await?;

        info!(database = database_name, "connected to mongodb");

        Ok(db)
    }

    #[must_use]
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Round-trip a `ping` command to the server.
    ///
    /// # Errors
    ///
    /// Returns an error when the server is unreachable.
    pub async fn ping(&self) -> Result<(), Error> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(())
    }

    /// Create the unique indexes the saved item collections rely on.
    ///
    /// Index creation is idempotent, so this is safe to run on every start.
    /// Every collection is attempted even when an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns an error when index creation fails, for example because the
    /// collection already holds duplicate `(productName, userEmail)` pairs.
    pub async fn ensure_indexes(&self) -> Result<(), Error> {
        let mut first_error = None;

        for collection in [CART_COLLECTION, WISHLIST_COLLECTION] {
            let index = IndexModel::builder()
                .keys(doc! { "productName": 1, "userEmail": 1 })
                .options(
                    IndexOptions::builder()
                        .name(format!("{collection}_product_user_unique"))
                        .unique(true)
                        .build(),
                )
                .build();

            match self
                .collection::<mongodb::bson::Document>(collection)
                .create_index(index)
                .await
            {
                Ok(_) => info!(collection, "ensured unique product/user index"),
                Err(source) => {
                    first_error.get_or_insert(source);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Close the connection pool, waiting for in-use connections to return.
    pub async fn shutdown(self) {
        self.client.shutdown().await;

        info!("mongodb client shut down");
    }
}

/// Whether the error is a unique index violation.
#[must_use]
pub fn is_duplicate_key(error: &Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
