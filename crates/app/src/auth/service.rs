//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::{
        ApiTokenVersion, AuthServiceError, IssuedApiToken, Principal, format_api_token,
        generate_api_token_secret, hash_api_token, parse_api_token,
    },
    database::Db,
    domain::users::{MongoUsersRepository, records::Role},
};

#[derive(Debug, Clone)]
pub struct MongoAuthService {
    users: MongoUsersRepository,
}

impl MongoAuthService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            users: MongoUsersRepository::new(db),
        }
    }

    /// Promote the user with the given email to admin and issue a new API token.
    ///
    /// Any previously issued token for the user stops working.
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` when no user is registered with the email, or a
    /// storage error if the update fails.
    pub async fn issue_admin_token(&self, email: &str) -> Result<IssuedApiToken, AuthServiceError> {
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(version, &secret);
        let token_hash = hash_api_token(version, &secret);

        let matched = self
            .users
            .grant_role(email, Role::Admin, &token_hash)
            .await?;

        if matched == 0 {
            return Err(AuthServiceError::UnknownUser);
        }

        info!(email, "issued admin api token");

        Ok(IssuedApiToken {
            token,
            principal: Principal {
                email: email.to_string(),
                role: Role::Admin,
            },
        })
    }
}

#[async_trait]
impl AuthService for MongoAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed_token = parse_api_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let token_hash = hash_api_token(parsed_token.version, &parsed_token.secret);

        let user = self
            .users
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        Ok(Principal {
            email: user.email,
            role: user.role,
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<Principal, AuthServiceError>;
}
