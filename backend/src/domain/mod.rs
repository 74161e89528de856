//! Domain primitives, validation and services for user accounts.
//!
//! Purpose: define strongly typed account values, the request validation
//! pipeline and the service implementing the [`ports::UserAccounts`] driving
//! port. Nothing here depends on actix-web or MongoDB; adapters live in
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error envelope.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, NewUser, UserPatch: account records.
//! - UserReply, OperationOutcome: terminal states of an operation.
//! - UserAccountsService: validation followed by one repository call.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_accounts_service;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::outcome::{OperationOutcome, StorageFailure, UserReply};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, NewUser, User, UserId, UserName, UserPatch, UserStatus, UserValidationError,
    is_document_id, is_email,
};
pub use self::user_accounts_service::UserAccountsService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use accounts::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("no such user"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
