//! Tests for rendering the error envelope over HTTP.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("later"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_follows_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(error.status_code(), status);
}

#[actix_web::test]
async fn internal_errors_hide_message_and_details() {
    let error = Error::internal("mongodb://admin:pw@db failed")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "driver": "timeout" }));

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({ "code": "internal_error", "message": "Internal server error", "traceId": TRACE_ID })
    );
}

#[actix_web::test]
async fn unavailable_collaborators_keep_their_message() {
    let error = Error::service_unavailable("PIN code collaborator is not configured")
        .with_trace_id(TRACE_ID);

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["message"], json!("PIN code collaborator is not configured"));
}

#[actix_web::test]
async fn untraced_errors_omit_the_header() {
    let (status, header, body) = render(&Error::invalid_request("bad")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
}

#[test]
fn malformed_json_becomes_invalid_request_with_position() {
    let Err(parse_error) = serde_json::from_str::<Value>("{\n  \"name\": ") else {
        panic!("input is truncated JSON");
    };

    let error = Error::from(parse_error);

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "request body is not valid JSON");
    let details = error.details().expect("position details");
    assert_eq!(details["line"], json!(2));
    assert!(details["column"].as_u64().is_some());
}
