//! User account data model.
//!
//! Every value here is validated on construction, so a [`User`] held by the
//! domain always satisfies the account invariants. The credential stored
//! alongside a user in persistence has no representation here: adapters
//! project it out before records reach the domain.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier is not a 24 character hexadecimal document id.
    #[error("user id must be a 24 character hexadecimal identifier")]
    InvalidId,
    /// The name was empty once sanitized.
    #[error("name must not be empty")]
    EmptyName,
    /// The email address failed the syntax check.
    #[error("email must be a valid email address")]
    InvalidEmail,
    /// The status is not one of the known lifecycle states.
    #[error("status must be one of: enabled, disabled")]
    UnknownStatus,
}

static USER_ID_RE: OnceLock<Regex> = OnceLock::new();

fn user_id_regex() -> &'static Regex {
    USER_ID_RE.get_or_init(|| {
        Regex::new("^[0-9a-fA-F]{24}$")
            .unwrap_or_else(|error| panic!("user id regex failed to compile: {error}"))
    })
}

/// Returns `true` when `value` has the storage identifier format.
///
/// # Examples
/// ```
/// use accounts::domain::is_document_id;
///
/// assert!(is_document_id("507f1f77bcf86cd799439011"));
/// assert!(!is_document_id("507f1f77"));
/// ```
pub fn is_document_id(value: &str) -> bool {
    user_id_regex().is_match(value)
}

/// Stable user identifier in document-id format (24 hexadecimal characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// Hex digits are stored lowercase, the spelling storage generates.
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if !is_document_id(&id) {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a user, already sanitized.
///
/// The constructor does not sanitize; callers pass text that went through
/// [`crate::domain::validation::sanitize`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !is_email(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

/// Returns `true` when `value` is a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// The account is active. New accounts always start here.
    Enabled,
    /// The account has been switched off.
    Disabled,
}

impl UserStatus {
    /// Every accepted wire value, in declaration order.
    pub const ALLOWED: [&'static str; 2] = ["enabled", "disabled"];

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            _ => Err(UserValidationError::UnknownStatus),
        }
    }
}

/// Application user as returned to callers.
///
/// ## Invariants
/// - `id` is in document-id format.
/// - `name` is sanitized and non-empty.
/// - `email` passed the syntax check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    status: UserStatus,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, name: UserName, email: EmailAddress, status: UserStatus) -> Self {
        Self {
            id,
            name,
            email,
            status,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact address, unique across users.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Lifecycle state.
    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Apply a partial update, changing only the supplied fields.
    #[must_use]
    pub fn patched(mut self, patch: &UserPatch) -> Self {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self
    }
}

/// Record handed to storage when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Sanitized display name.
    pub name: UserName,
    /// Contact address.
    pub email: EmailAddress,
    /// Initial lifecycle state.
    pub status: UserStatus,
}

impl NewUser {
    /// New accounts are always created enabled.
    pub fn enabled(name: UserName, email: EmailAddress) -> Self {
        Self {
            name,
            email,
            status: UserStatus::Enabled,
        }
    }
}

/// Partial update; `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement display name.
    pub name: Option<UserName>,
    /// Replacement contact address.
    pub email: Option<EmailAddress>,
    /// Replacement lifecycle state.
    pub status: Option<UserStatus>,
}

impl UserPatch {
    /// `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests;
