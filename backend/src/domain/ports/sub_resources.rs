//! Ports for the phone number and PIN code collaborators.
//!
//! These sub-resources hang off `/users/{userId}` but are owned by other
//! services. Requests are forwarded unmodified: the raw JSON body plus the
//! path user id. The collaborator decides the status and body of the reply.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Error;

/// Reply produced by a sub-resource collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct SubResourceReply {
    /// HTTP status code chosen by the collaborator.
    pub status: u16,
    /// JSON body to return verbatim.
    pub body: Value,
}

/// Phone numbers attached to a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhoneNumbers: Send + Sync {
    /// Replace the phone numbers of `user_id` with those in `body`.
    async fn set_user_phones(&self, user_id: &str, body: Value)
    -> Result<SubResourceReply, Error>;
}

/// PIN codes attached to a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PinCodes: Send + Sync {
    /// Create a PIN for `user_id`.
    async fn create_pin(&self, user_id: &str, body: Value) -> Result<SubResourceReply, Error>;

    /// Change the PIN of `user_id`.
    async fn update_pin(&self, user_id: &str, body: Value) -> Result<SubResourceReply, Error>;

    /// Remove the PIN of `user_id`.
    async fn delete_pin(&self, user_id: &str, body: Value) -> Result<SubResourceReply, Error>;
}

/// Stand-in used when no collaborator is configured.
///
/// Every call fails with `service_unavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredSubResources;

impl UnconfiguredSubResources {
    fn unavailable(resource: &str) -> Error {
        Error::service_unavailable(format!("{resource} collaborator is not configured"))
    }
}

#[async_trait]
impl PhoneNumbers for UnconfiguredSubResources {
    async fn set_user_phones(
        &self,
        _user_id: &str,
        _body: Value,
    ) -> Result<SubResourceReply, Error> {
        Err(Self::unavailable("phone number"))
    }
}

#[async_trait]
impl PinCodes for UnconfiguredSubResources {
    async fn create_pin(&self, _user_id: &str, _body: Value) -> Result<SubResourceReply, Error> {
        Err(Self::unavailable("PIN code"))
    }

    async fn update_pin(&self, _user_id: &str, _body: Value) -> Result<SubResourceReply, Error> {
        Err(Self::unavailable("PIN code"))
    }

    async fn delete_pin(&self, _user_id: &str, _body: Value) -> Result<SubResourceReply, Error> {
        Err(Self::unavailable("PIN code"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use serde_json::json;

    #[tokio::test]
    async fn unconfigured_collaborators_are_unavailable() {
        let stand_in = UnconfiguredSubResources;

        let phones = stand_in
            .set_user_phones("507f1f77bcf86cd799439011", json!({}))
            .await
            .expect_err("phones unavailable");
        let pin = stand_in
            .delete_pin("507f1f77bcf86cd799439011", json!({}))
            .await
            .expect_err("pins unavailable");

        assert_eq!(phones.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(pin.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(phones.message(), "phone number collaborator is not configured");
    }
}
