//! Classification of MongoDB driver errors into user persistence errors.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

/// Server error code for unique index violations.
pub(crate) const DUPLICATE_KEY_CODE: i32 = 11000;

/// Map a driver error into the port error taxonomy.
pub(crate) fn map_mongo_error(error: MongoError) -> UserPersistenceError {
    debug!(error = %error, "mongodb operation failed");

    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE => {
            UserPersistenceError::duplicate_key(write.message.clone())
        }
        ErrorKind::Command(command) if command.code == DUPLICATE_KEY_CODE => {
            UserPersistenceError::duplicate_key(command.message.clone())
        }
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Authentication { .. } => UserPersistenceError::connection(error.to_string()),
        _ => UserPersistenceError::query(error.to_string()),
    }
}
