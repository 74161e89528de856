//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: user account handlers, the phone and PIN sub-resource
//!   routes, and the health probes
//! - **Schemas**: domain type wrappers and reply envelopes from
//!   [`crate::inbound::http::schemas`] so domain types stay free of utoipa
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, LocationSchema, NotFoundEnvelope, StorageCauseSchema,
    StorageFailureEnvelope, UserEnvelope, UserListEnvelope, UserSchema, UserStatusSchema,
    ValidationErrorsEnvelope, ViolationSchema,
};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        description = "HTTP interface for validated user account management and health probes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::set_user_phones,
        crate::inbound::http::users::create_pin,
        crate::inbound::http::users::update_pin,
        crate::inbound::http::users::delete_pin,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserStatusSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ViolationSchema,
        LocationSchema,
        UserEnvelope,
        UserListEnvelope,
        ValidationErrorsEnvelope,
        NotFoundEnvelope,
        StorageCauseSchema,
        StorageFailureEnvelope,
        CreateUserRequest,
        UpdateUserRequest,
    )),
    tags(
        (name = "users", description = "User account management"),
        (name = "sub-resources", description = "Phone and PIN routes forwarded to collaborators"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
