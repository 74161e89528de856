//! Response mapper for user account operations.
//!
//! | Outcome           | Status | Body                                       |
//! |-------------------|--------|--------------------------------------------|
//! | validation failed | 422    | `{"errors": [violation, ...]}`             |
//! | not found         | 404    | `{"errors": violation}`                    |
//! | storage failure   | 500    | `{"errors": {kind, message}, "message": _}`|
//! | success           | 200    | `{"data": payload}`                        |

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::ports::UserPersistenceError;
use crate::domain::validation::Violation;
use crate::domain::{OperationOutcome, StorageFailure, UserReply};

#[derive(Debug, Serialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct ErrorsEnvelope<E> {
    errors: E,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Serialized form of a storage failure cause.
#[derive(Debug, Serialize)]
struct StorageCause<'a> {
    kind: &'static str,
    message: &'a str,
}

impl<'a> From<&'a UserPersistenceError> for StorageCause<'a> {
    fn from(error: &'a UserPersistenceError) -> Self {
        Self {
            kind: error.kind(),
            message: error.message(),
        }
    }
}

fn errors<E: Serialize>(status: StatusCode, errors: E) -> HttpResponse {
    HttpResponse::build(status).json(ErrorsEnvelope {
        errors,
        message: None,
    })
}

fn storage_failure(failure: &StorageFailure) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorsEnvelope {
        errors: StorageCause::from(&failure.cause),
        message: Some(failure.message()),
    })
}

fn not_found(locator: &Violation) -> HttpResponse {
    errors(StatusCode::NOT_FOUND, locator)
}

/// Translate an operation reply into an HTTP response.
///
/// # Examples
/// ```
/// use accounts::domain::UserReply;
/// use accounts::inbound::http::reply::respond;
///
/// let response = respond(UserReply::success(vec!["ada"]));
/// assert_eq!(response.status().as_u16(), 200);
/// ```
pub fn respond<T: Serialize>(reply: UserReply<T>) -> HttpResponse {
    match reply {
        UserReply::Invalid(result) => {
            errors(StatusCode::UNPROCESSABLE_ENTITY, result.violations())
        }
        UserReply::Completed(OperationOutcome::Success(payload)) => {
            HttpResponse::Ok().json(DataEnvelope { data: payload })
        }
        UserReply::Completed(OperationOutcome::NotFound(locator)) => not_found(&locator),
        UserReply::Completed(OperationOutcome::StorageFailure(failure)) => {
            storage_failure(&failure)
        }
    }
}
