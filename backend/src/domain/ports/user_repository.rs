//! Port abstraction for user persistence adapters and their errors.
//!
//! Every read excludes the stored credential; adapters apply the projection
//! before mapping records into [`User`].

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, User, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "user repository query failed: {message}",
        /// A storage-level unique constraint rejected the write.
        DuplicateKey => "user repository rejected duplicate key: {message}",
    }
}

impl UserPersistenceError {
    /// Stable label for the failure category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::Query { .. } => "query",
            Self::DuplicateKey { .. } => "duplicate_key",
        }
    }
}

/// Storage collaborator for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record.
    async fn create(&self, record: &NewUser) -> Result<User, UserPersistenceError>;

    /// Return every user, in storage order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Apply `patch` to the user and return the post-update record.
    ///
    /// Returns `None` when no user has the identifier.
    async fn find_by_id_and_update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the user registered under `email`, if any.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError>;
}
