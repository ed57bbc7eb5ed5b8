//! Users Data

use serde::Serialize;

use crate::domain::users::records::Role;

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub role: Role,
}

impl NewUser {
    /// A registration with the default `user` role.
    #[must_use]
    pub fn new(email: String, name: String, photo_url: String) -> Self {
        Self {
            email,
            name,
            photo_url,
            role: Role::User,
        }
    }
}
