//! User accounts domain service.
//!
//! Implements the [`UserAccounts`] driving port: validate the request, run
//! exactly one repository call and classify its outcome. Email uniqueness is
//! checked through the repository's [`crate::domain::ports::EmailDirectory`]
//! capability during validation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::ports::{UserAccounts, UserPersistenceError, UserRepository};
use crate::domain::validation::{
    Location, USER_ID_PARAM, UserOperation, ValidationRequest, ValidationResult, Violation,
    rules_for, text_of, validate,
};
use crate::domain::{
    EmailAddress, NewUser, User, UserId, UserName, UserPatch, UserReply, UserStatus,
    UserValidationError,
};

/// User accounts service backed by a [`UserRepository`].
pub struct UserAccountsService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserAccountsService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserAccountsService<R> {
    /// Create a new service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserAccountsService<R>
where
    R: UserRepository + ?Sized,
{
    async fn validated(
        &self,
        operation: UserOperation,
        request: &mut ValidationRequest,
    ) -> Result<(), ValidationResult> {
        let result = validate(rules_for(operation), request, &*self.repository).await;
        if result.is_valid() {
            Ok(())
        } else {
            Err(result)
        }
    }

    fn failed<T>(operation: UserOperation, cause: UserPersistenceError) -> UserReply<T> {
        error!(
            operation = operation.as_str(),
            kind = cause.kind(),
            error = %cause,
            "user repository call failed"
        );
        UserReply::storage_failure(operation, cause)
    }
}

#[async_trait]
impl<R> UserAccounts for UserAccountsService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, mut request: ValidationRequest) -> UserReply<User> {
        let operation = UserOperation::CreateUser;
        if let Err(result) = self.validated(operation, &mut request).await {
            return UserReply::Invalid(result);
        }
        let record = match new_user_from(&request) {
            Ok(record) => record,
            Err(result) => return UserReply::Invalid(result),
        };

        match self.repository.create(&record).await {
            Ok(user) => {
                info!(user_id = %user.id(), "user created");
                UserReply::success(user)
            }
            Err(cause) => Self::failed(operation, cause),
        }
    }

    async fn list_users(&self) -> UserReply<Vec<User>> {
        match self.repository.find_all().await {
            Ok(users) => UserReply::success(users),
            Err(cause) => Self::failed(UserOperation::ListUsers, cause),
        }
    }

    async fn get_user(&self, mut request: ValidationRequest) -> UserReply<User> {
        let operation = UserOperation::GetUser;
        if let Err(result) = self.validated(operation, &mut request).await {
            return UserReply::Invalid(result);
        }
        let id = match user_id_from(&request) {
            Ok(id) => id,
            Err(result) => return UserReply::Invalid(result),
        };

        match self.repository.find_by_id(&id).await {
            Ok(Some(user)) => UserReply::success(user),
            Ok(None) => UserReply::not_found(id.as_ref()),
            Err(cause) => Self::failed(operation, cause),
        }
    }

    async fn update_user(&self, mut request: ValidationRequest) -> UserReply<User> {
        let operation = UserOperation::UpdateUser;
        if let Err(result) = self.validated(operation, &mut request).await {
            return UserReply::Invalid(result);
        }
        let (id, patch) = match user_id_from(&request).and_then(|id| {
            let patch = patch_from(&request)?;
            Ok((id, patch))
        }) {
            Ok(parts) => parts,
            Err(result) => return UserReply::Invalid(result),
        };

        let found = if patch.is_empty() {
            self.repository.find_by_id(&id).await
        } else {
            self.repository.find_by_id_and_update(&id, &patch).await
        };

        match found {
            Ok(Some(user)) => {
                if !patch.is_empty() {
                    info!(user_id = %user.id(), "user updated");
                }
                UserReply::success(user)
            }
            Ok(None) => UserReply::not_found(id.as_ref()),
            Err(cause) => Self::failed(operation, cause),
        }
    }
}

fn body_field<T>(
    request: &ValidationRequest,
    field: &str,
    parse: impl FnOnce(String) -> Result<T, UserValidationError>,
) -> Result<Option<T>, ValidationResult> {
    let Some(raw) = request.get(Location::Body, field) else {
        return Ok(None);
    };
    parse(text_of(raw))
        .map(Some)
        .map_err(|error| rejected(Location::Body, field, Some(raw.clone()), &error))
}

fn required_body_field<T>(
    request: &ValidationRequest,
    field: &str,
    parse: impl FnOnce(String) -> Result<T, UserValidationError>,
) -> Result<T, ValidationResult> {
    body_field(request, field, parse)?.ok_or_else(|| {
        rejected(
            Location::Body,
            field,
            None,
            &format!("{field} field is required"),
        )
    })
}

fn rejected(
    location: Location,
    field: &str,
    value: Option<Value>,
    message: &dyn std::fmt::Display,
) -> ValidationResult {
    ValidationResult::from(vec![Violation {
        location,
        field: field.to_owned(),
        value,
        message: message.to_string(),
    }])
}

fn user_id_from(request: &ValidationRequest) -> Result<UserId, ValidationResult> {
    let raw = request.param(USER_ID_PARAM).unwrap_or_default();
    UserId::new(raw).map_err(|error| {
        rejected(
            Location::Params,
            USER_ID_PARAM,
            Some(Value::String(raw.to_owned())),
            &error,
        )
    })
}

fn new_user_from(request: &ValidationRequest) -> Result<NewUser, ValidationResult> {
    let name = required_body_field(request, "name", UserName::new)?;
    let email = required_body_field(request, "email", EmailAddress::new)?;
    Ok(NewUser::enabled(name, email))
}

fn patch_from(request: &ValidationRequest) -> Result<UserPatch, ValidationResult> {
    Ok(UserPatch {
        name: body_field(request, "name", UserName::new)?,
        email: body_field(request, "email", EmailAddress::new)?,
        status: body_field(request, "status", |text| text.parse::<UserStatus>())?,
    })
}

#[cfg(test)]
#[path = "user_accounts_service_tests.rs"]
mod tests;
