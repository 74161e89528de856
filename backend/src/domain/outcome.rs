//! Terminal states of a user account operation.
//!
//! Services never build HTTP responses. They return a [`UserReply`] and the
//! inbound adapter decides the status code and body.

use crate::domain::ports::UserPersistenceError;
use crate::domain::validation::{UserOperation, ValidationResult, Violation};

/// Storage failure raised while running an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFailure {
    /// Operation that was running.
    pub operation: UserOperation,
    /// Error reported by the repository.
    pub cause: UserPersistenceError,
}

impl StorageFailure {
    /// Fixed caller-facing message for the failed operation.
    pub fn message(&self) -> &'static str {
        self.operation.failure_message()
    }
}

/// Result of an operation whose input passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome<T> {
    /// The operation produced its payload.
    Success(T),
    /// No user matched; the locator names the missing resource.
    NotFound(Violation),
    /// Storage rejected or could not run the request.
    StorageFailure(StorageFailure),
}

impl<T> OperationOutcome<T> {
    /// Wrap a repository error for `operation`.
    pub fn storage_failure(operation: UserOperation, cause: UserPersistenceError) -> Self {
        Self::StorageFailure(StorageFailure { operation, cause })
    }
}

/// Everything a user account operation can answer.
#[derive(Debug, Clone, PartialEq)]
pub enum UserReply<T> {
    /// Validation failed; nothing was persisted.
    Invalid(ValidationResult),
    /// Validation passed and the operation ran.
    Completed(OperationOutcome<T>),
}

impl<T> UserReply<T> {
    /// Successful reply carrying `payload`.
    pub fn success(payload: T) -> Self {
        Self::Completed(OperationOutcome::Success(payload))
    }

    /// Not-found reply for the user id `user_id`.
    pub fn not_found(user_id: &str) -> Self {
        Self::Completed(OperationOutcome::NotFound(Violation::user_not_found(
            user_id,
        )))
    }

    /// Storage failure reply.
    pub fn storage_failure(operation: UserOperation, cause: UserPersistenceError) -> Self {
        Self::Completed(OperationOutcome::storage_failure(operation, cause))
    }

    /// Payload of a successful reply.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Completed(OperationOutcome::Success(payload)) => Some(payload),
            _ => None,
        }
    }
}
