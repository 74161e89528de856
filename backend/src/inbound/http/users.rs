//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Ada","email":"ada@example.com"}
//! GET  /users
//! GET  /users/{userId}
//! PUT  /users/{userId} {"status":"disabled"}
//! POST /users/{userId}/phones | createPin | updatePin | deletePin
//! ```
//!
//! Account handlers hand the raw request to the [`UserAccounts`] port and
//! render its reply with [`respond`]. Sub-resource handlers forward the body
//! untouched to the phone and PIN collaborators.
//!
//! [`UserAccounts`]: crate::domain::ports::UserAccounts

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, put, web};
use serde_json::Value;
use tracing::warn;

use crate::domain::Error;
use crate::domain::ports::SubResourceReply;
use crate::domain::validation::{USER_ID_PARAM, ValidationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::reply::respond;
use crate::inbound::http::schemas::{
    ErrorSchema, NotFoundEnvelope, StorageFailureEnvelope, UserEnvelope, UserListEnvelope,
    UserStatusSchema, ValidationErrorsEnvelope,
};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
///
/// Documentation only: handlers read the raw JSON so validation can report
/// every missing or malformed field at once.
#[derive(utoipa::ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
}

/// Request body for `PUT /users/{userId}`; every field is optional.
#[derive(utoipa::ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    status: Option<UserStatusSchema>,
}

/// Parse a request body. An empty body counts as `{}`.
fn parse_body(body: &web::Bytes) -> Result<Value, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_slice(body)?)
}

fn by_user_id(user_id: String) -> ValidationRequest {
    ValidationRequest::new().with_param(USER_ID_PARAM, user_id)
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserEnvelope),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ValidationErrorsEnvelope),
        (status = 500, description = "Storage failure", body = StorageFailureEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = ValidationRequest::new().with_body(parse_body(&body)?);
    Ok(respond(state.users.create_user(request).await))
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = UserListEnvelope),
        (status = 500, description = "Storage failure", body = StorageFailureEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> HttpResponse {
    respond(state.users.list_users().await)
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "24 character hexadecimal user id")),
    responses(
        (status = 200, description = "User", body = UserEnvelope),
        (status = 404, description = "No user has this id", body = NotFoundEnvelope),
        (status = 422, description = "Malformed id", body = ValidationErrorsEnvelope),
        (status = 500, description = "Storage failure", body = StorageFailureEnvelope)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{userId}")]
pub async fn get_user(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    respond(state.users.get_user(by_user_id(path.into_inner())).await)
}

/// Patch one user; only supplied fields change.
#[utoipa::path(
    put,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "24 character hexadecimal user id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserEnvelope),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 404, description = "No user has this id", body = NotFoundEnvelope),
        (status = 422, description = "Validation failed", body = ValidationErrorsEnvelope),
        (status = 500, description = "Storage failure", body = StorageFailureEnvelope)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{userId}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = by_user_id(path.into_inner()).with_body(parse_body(&body)?);
    Ok(respond(state.users.update_user(request).await))
}

fn forward(reply: SubResourceReply) -> ApiResult<HttpResponse> {
    let status = StatusCode::from_u16(reply.status).map_err(|err| {
        warn!(status = reply.status, %err, "collaborator returned an invalid status");
        Error::internal(format!("collaborator returned invalid status {}", reply.status))
    })?;
    Ok(HttpResponse::build(status).json(reply.body))
}

/// Replace a user's phone numbers via the phone collaborator.
#[utoipa::path(
    post,
    path = "/users/{userId}/phones",
    params(("userId" = String, Path, description = "User id")),
    request_body(content = serde_json::Value, description = "Forwarded unmodified"),
    responses(
        (status = 503, description = "No phone collaborator configured", body = ErrorSchema)
    ),
    tags = ["sub-resources"],
    operation_id = "setUserPhones"
)]
#[post("/users/{userId}/phones")]
pub async fn set_user_phones(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let reply = state
        .phones
        .set_user_phones(&path, parse_body(&body)?)
        .await?;
    forward(reply)
}

/// Create a PIN via the PIN collaborator.
#[utoipa::path(
    post,
    path = "/users/{userId}/createPin",
    params(("userId" = String, Path, description = "User id")),
    request_body(content = serde_json::Value, description = "Forwarded unmodified"),
    responses(
        (status = 503, description = "No PIN collaborator configured", body = ErrorSchema)
    ),
    tags = ["sub-resources"],
    operation_id = "createPinCode"
)]
#[post("/users/{userId}/createPin")]
pub async fn create_pin(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    forward(state.pins.create_pin(&path, parse_body(&body)?).await?)
}

/// Change a PIN via the PIN collaborator.
#[utoipa::path(
    post,
    path = "/users/{userId}/updatePin",
    params(("userId" = String, Path, description = "User id")),
    request_body(content = serde_json::Value, description = "Forwarded unmodified"),
    responses(
        (status = 503, description = "No PIN collaborator configured", body = ErrorSchema)
    ),
    tags = ["sub-resources"],
    operation_id = "updatePinCode"
)]
#[post("/users/{userId}/updatePin")]
pub async fn update_pin(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    forward(state.pins.update_pin(&path, parse_body(&body)?).await?)
}

/// Remove a PIN via the PIN collaborator.
#[utoipa::path(
    post,
    path = "/users/{userId}/deletePin",
    params(("userId" = String, Path, description = "User id")),
    request_body(content = serde_json::Value, description = "Forwarded unmodified"),
    responses(
        (status = 503, description = "No PIN collaborator configured", body = ErrorSchema)
    ),
    tags = ["sub-resources"],
    operation_id = "deletePinCode"
)]
#[post("/users/{userId}/deletePin")]
pub async fn delete_pin(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    forward(state.pins.delete_pin(&path, parse_body(&body)?).await?)
}

/// Register every users route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::users::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(set_user_phones)
        .service(create_pin)
        .service(update_pin)
        .service(delete_pin);
}
