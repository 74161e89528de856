//! Capability used by validation to check email ownership.
//!
//! Validation only needs to know who, if anyone, already holds an address.
//! Any [`UserRepository`] provides that through `find_by_email`, so the
//! blanket implementation lets services inject their repository directly.

use async_trait::async_trait;

use crate::domain::{EmailAddress, UserId};

use super::{UserPersistenceError, UserRepository};

/// Read-only lookup of email ownership.
#[async_trait]
pub trait EmailDirectory: Send + Sync {
    /// Identifier of the user registered under `email`, if any.
    async fn email_owner(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserId>, UserPersistenceError>;
}

#[async_trait]
impl<R> EmailDirectory for R
where
    R: UserRepository + ?Sized,
{
    async fn email_owner(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserId>, UserPersistenceError> {
        let owner = self.find_by_email(email).await?;
        Ok(owner.map(|user| user.id().clone()))
    }
}
