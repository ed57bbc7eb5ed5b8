//! User Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{lenient, object_ids::TypedObjectId};

/// User ID
pub type UserId = TypedObjectId<UserRecord>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// User Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(default, rename = "photoURL", deserialize_with = "lenient::null_as_default")]
    pub photo_url: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub role: Role,
    /// SHA-256 of the user's API token, if one was issued.
    #[serde(default, rename = "tokenHash", skip_serializing_if = "Option::is_none")]
    pub token_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_role_defaults_to_user() -> TestResult {
        let record: UserRecord = from_document(doc! {
            "_id": UserId::new(),
            "email": "ana@example.com",
        })?;

        assert_eq!(record.role, Role::User);
        assert!(record.token_hash.is_none());

        Ok(())
    }

    #[test]
    fn admin_role_is_read_from_lowercase_string() -> TestResult {
        let record: UserRecord = from_document(doc! {
            "_id": UserId::new(),
            "email": "ana@example.com",
            "role": "admin",
            "tokenHash": "abc",
        })?;

        assert_eq!(record.role, Role::Admin);
        assert_eq!(record.token_hash.as_deref(), Some("abc"));

        Ok(())
    }

    #[test]
    fn null_photo_url_and_role_decode_as_defaults() -> TestResult {
        let record: UserRecord = from_document(doc! {
            "_id": UserId::new(),
            "email": "ana@example.com",
            "name": null,
            "photoURL": null,
            "role": null,
        })?;

        assert_eq!(record.photo_url, "");
        assert_eq!(record.name, "");
        assert_eq!(record.role, Role::User);

        Ok(())
    }
}
