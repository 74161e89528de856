//! BSON document shapes for the users collection.
//!
//! These types are implementation details of the MongoDB adapter and never
//! reach the domain. Reads always project the credential out, so
//! `password` is only populated on insert.

use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{EmailAddress, NewUser, User, UserId, UserName, UserPatch, UserStatus};

/// Stored form of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserDocument {
    /// Build the document inserted for a new user.
    pub fn from_new_user(id: ObjectId, record: &NewUser) -> Self {
        Self {
            id,
            name: record.name.to_string(),
            email: record.email.to_string(),
            status: record.status.as_str().to_owned(),
            password: None,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = UserPersistenceError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, error: &dyn std::fmt::Display| {
            UserPersistenceError::query(format!(
                "stored user {} has invalid {field}: {error}",
                document.id.to_hex()
            ))
        };
        let id = UserId::new(document.id.to_hex()).map_err(|err| corrupt("_id", &err))?;
        let name = UserName::new(document.name.clone()).map_err(|err| corrupt("name", &err))?;
        let email =
            EmailAddress::new(document.email.clone()).map_err(|err| corrupt("email", &err))?;
        let status = document
            .status
            .parse::<UserStatus>()
            .map_err(|err| corrupt("status", &err))?;
        Ok(User::new(id, name, email, status))
    }
}

/// Projection applied to every read so the credential never leaves storage.
pub(crate) fn without_credential() -> Document {
    doc! { "password": 0 }
}

/// `$set` update for the fields present in `patch`.
pub(crate) fn set_fields(patch: &UserPatch) -> Document {
    let mut fields = Document::new();
    if let Some(name) = &patch.name {
        fields.insert("name", name.to_string());
    }
    if let Some(email) = &patch.email {
        fields.insert("email", email.to_string());
    }
    if let Some(status) = patch.status {
        fields.insert("status", status.as_str());
    }
    doc! { "$set": fields }
}

/// Parse a domain identifier into a storage object id.
pub(crate) fn object_id(id: &UserId) -> Result<ObjectId, UserPersistenceError> {
    let hex: &str = id.as_ref();
    ObjectId::parse_str(hex)
        .map_err(|err| UserPersistenceError::query(format!("invalid object id {hex}: {err}")))
}
