//! User request and response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use boutique_app::domain::users::{data::NewUser, records::UserRecord};

/// Register Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser::new(
            request.email.unwrap_or_default(),
            request.name.unwrap_or_default(),
            request.photo_url.unwrap_or_default(),
        )
    }
}

/// Login Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct LoginRequest {
    pub email: Option<String>,
}

/// User Response
///
/// Never includes the stored token hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    /// `user` or `admin`
    pub role: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.to_hex(),
            email: user.email,
            name: user.name,
            photo_url: user.photo_url,
            role: user.role.to_string(),
        }
    }
}
