//! Users Repository

use mongodb::{Collection, bson::doc, error::Error};
use serde::Serialize;

use crate::{
    database::{Db, USERS_COLLECTION},
    domain::users::{
        data::NewUser,
        records::{Role, UserId, UserRecord},
    },
};

#[derive(Debug, Serialize)]
struct UserDocument<'a> {
    #[serde(rename = "_id")]
    id: UserId,
    #[serde(flatten)]
    user: &'a NewUser,
}

#[derive(Debug, Clone)]
pub(crate) struct MongoUsersRepository {
    collection: Collection<UserRecord>,
}

impl MongoUsersRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }

    pub(crate) async fn create_user(&self, user: NewUser) -> Result<UserRecord, Error> {
        let id = UserId::new();

        self.collection
            .clone_with_type::<UserDocument<'_>>()
            .insert_one(UserDocument { id, user: &user })
            .await?;

        Ok(UserRecord {
            id,
            email: user.email,
            name: user.name,
            photo_url: user.photo_url,
            role: user.role,
            token_hash: None,
        })
    }

    pub(crate) async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, Error> {
        self.collection.find_one(doc! { "email": email }).await
    }

    pub(crate) async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserRecord>, Error> {
        self.collection
            .find_one(doc! { "tokenHash": token_hash })
            .await
    }

    /// Set the role and token hash of the first user with the given email.
    ///
    /// Returns the number of matched documents.
    pub(crate) async fn grant_role(
        &self,
        email: &str,
        role: Role,
        token_hash: &str,
    ) -> Result<u64, Error> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "role": role.as_str(), "tokenHash": token_hash } },
            )
            .await?;

        Ok(result.matched_count)
    }
}
