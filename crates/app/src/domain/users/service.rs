//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        data::NewUser, errors::UsersServiceError, records::UserRecord,
        repository::MongoUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MongoUsersService {
    repository: MongoUsersRepository,
}

impl MongoUsersService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoUsersRepository::new(db),
        }
    }
}

#[async_trait]
impl UsersService for MongoUsersService {
    async fn register(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        Ok(self.repository.create_user(user).await?)
    }

    async fn login(&self, email: &str) -> Result<UserRecord, UsersServiceError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Stores a new user record. Emails are not checked for uniqueness.
    async fn register(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Looks up the first user registered with the given email.
    async fn login(&self, email: &str) -> Result<UserRecord, UsersServiceError>;
}
