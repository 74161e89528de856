//! Actix rendering of the shared error envelope.
//!
//! Account operation outcomes have their own bodies (see [`super::reply`]).
//! The envelope covers what happens before or beside them: unreadable JSON
//! bodies, unconfigured collaborators and unexpected faults.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::debug;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

/// Envelope actually sent to the client.
///
/// Internal errors keep only their code and trace id; their message and
/// details may name driver or collaborator internals.
fn client_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = client_view(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = body.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(body)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        debug!(error = %err, line = err.line(), column = err.column(), "rejected request body");
        Self::invalid_request("request body is not valid JSON").with_details(serde_json::json!({
            "line": err.line(),
            "column": err.column(),
        }))
    }
}

#[cfg(test)]
mod tests;
