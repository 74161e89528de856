//! OpenAPI schema definitions for domain types and response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialized shape and live in the inbound
//! adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body is not valid JSON.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A collaborator is not configured or unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "request body is not valid JSON")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UserStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserStatus)]
pub enum UserStatusSchema {
    /// Active account.
    #[schema(rename = "enabled")]
    Enabled,
    /// Switched-off account.
    #[schema(rename = "disabled")]
    Disabled,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// The stored credential is never part of this shape.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// 24 character hexadecimal document id.
    #[schema(example = "507f1f77bcf86cd799439011")]
    id: String,
    /// Sanitized display name.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Unique contact address.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Lifecycle state.
    status: UserStatusSchema,
}

/// OpenAPI schema for [`crate::domain::validation::Location`].
#[derive(ToSchema)]
#[schema(as = crate::domain::validation::Location)]
pub enum LocationSchema {
    /// JSON request body.
    #[schema(rename = "body")]
    Body,
    /// Path parameters.
    #[schema(rename = "params")]
    Params,
    /// Query string.
    #[schema(rename = "query")]
    Query,
}

/// OpenAPI schema for [`crate::domain::validation::Violation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::validation::Violation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ViolationSchema {
    /// Where the field was read from.
    location: LocationSchema,
    /// Field name.
    #[schema(example = "email")]
    param: String,
    /// Rejected value as received; omitted when the field was absent.
    value: Option<serde_json::Value>,
    /// Human-readable explanation.
    #[schema(example = "Invalid Email")]
    msg: String,
}

/// Successful single-user reply.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelope {
    data: UserSchema,
}

/// Successful user listing reply.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListEnvelope {
    data: Vec<UserSchema>,
}

/// Validation failure reply.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorsEnvelope {
    errors: Vec<ViolationSchema>,
}

/// Not-found reply locating the missing user.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NotFoundEnvelope {
    errors: ViolationSchema,
}

/// Storage failure cause.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StorageCauseSchema {
    /// Failure category.
    #[schema(example = "connection")]
    kind: String,
    /// Driver-reported detail.
    message: String,
}

/// Storage failure reply.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StorageFailureEnvelope {
    errors: StorageCauseSchema,
    /// Fixed per-operation message.
    #[schema(example = "There was a problem finding the users.")]
    message: String,
}
