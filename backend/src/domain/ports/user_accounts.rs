//! Driving port for the user account operations.
//!
//! Inbound adapters hand over the raw request data and receive a
//! [`UserReply`]; validation, persistence and outcome classification all
//! happen behind this trait.

use async_trait::async_trait;

use crate::domain::validation::ValidationRequest;
use crate::domain::{User, UserReply};

/// Domain use-case port for managing user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Validate and register a new user.
    async fn create_user(&self, request: ValidationRequest) -> UserReply<User>;

    /// List every user.
    async fn list_users(&self) -> UserReply<Vec<User>>;

    /// Validate the identifier and fetch one user.
    async fn get_user(&self, request: ValidationRequest) -> UserReply<User>;

    /// Validate the identifier and patch, then update one user.
    async fn update_user(&self, request: ValidationRequest) -> UserReply<User>;
}
