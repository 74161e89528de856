//! Tests for the user accounts service.

use std::sync::Arc;

use mockall::predicate::eq;
use serde_json::json;

use super::*;
use crate::domain::ports::MockUserRepository;
use crate::domain::{OperationOutcome, StorageFailure};

const KNOWN_ID: &str = "507f1f77bcf86cd799439011";

fn make_service(repo: MockUserRepository) -> UserAccountsService<MockUserRepository> {
    UserAccountsService::new(Arc::new(repo))
}

fn user(name: &str, email: &str, status: UserStatus) -> User {
    User::new(
        UserId::new(KNOWN_ID).expect("valid id"),
        UserName::new(name).expect("valid name"),
        EmailAddress::new(email).expect("valid email"),
        status,
    )
}

fn by_id() -> ValidationRequest {
    ValidationRequest::new().with_param(USER_ID_PARAM, KNOWN_ID)
}

#[tokio::test]
async fn create_persists_sanitized_enabled_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().times(1).returning(|_| Ok(None));
    repo.expect_create()
        .withf(|record: &NewUser| {
            record.name.to_string() == "Ada &amp; Co"
                && record.email.to_string() == "ada@x.com"
                && record.status == UserStatus::Enabled
        })
        .times(1)
        .returning(|record| {
            Ok(User::new(
                UserId::new(KNOWN_ID).expect("valid id"),
                record.name.clone(),
                record.email.clone(),
                record.status,
            ))
        });

    let request = ValidationRequest::new()
        .with_body(json!({ "name": "  Ada & Co ", "email": "ada@x.com", "status": "disabled" }));
    let reply = make_service(repo).create_user(request).await;

    let created = reply.into_success().expect("user created");
    assert_eq!(created.status(), UserStatus::Enabled);
    assert_eq!(created.name().to_string(), "Ada &amp; Co");
}

#[tokio::test]
async fn create_skips_storage_when_invalid() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().never();
    repo.expect_create().never();

    let request = ValidationRequest::new().with_body(json!({ "email": "not-an-email" }));
    let reply = make_service(repo).create_user(request).await;

    let UserReply::Invalid(result) = reply else {
        panic!("expected validation failure");
    };
    let fields: Vec<_> = result
        .violations()
        .iter()
        .map(|violation| violation.field.as_str())
        .collect();
    assert_eq!(fields, vec!["name", "name", "email"]);
}

#[tokio::test]
async fn create_reports_storage_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .times(1)
        .returning(|_| Err(UserPersistenceError::duplicate_key("email_1 dup key")));

    let request = ValidationRequest::new().with_body(json!({ "name": "Ada", "email": "a@x.com" }));
    let reply = make_service(repo).create_user(request).await;

    assert_eq!(
        reply,
        UserReply::Completed(OperationOutcome::StorageFailure(StorageFailure {
            operation: UserOperation::CreateUser,
            cause: UserPersistenceError::duplicate_key("email_1 dup key"),
        }))
    );
}

#[tokio::test]
async fn list_returns_every_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_all()
        .times(1)
        .returning(|| Ok(vec![user("Ada", "a@x.com", UserStatus::Enabled)]));

    let users = make_service(repo)
        .list_users()
        .await
        .into_success()
        .expect("users listed");

    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn list_reports_storage_failure_with_finding_message() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_all()
        .returning(|| Err(UserPersistenceError::connection("refused")));

    let reply = make_service(repo).list_users().await;

    let UserReply::Completed(OperationOutcome::StorageFailure(failure)) = reply else {
        panic!("expected storage failure");
    };
    assert_eq!(failure.message(), "There was a problem finding the users.");
}

#[tokio::test]
async fn get_returns_not_found_for_unknown_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(UserId::new(KNOWN_ID).expect("valid id")))
        .times(1)
        .returning(|_| Ok(None));

    let reply = make_service(repo).get_user(by_id()).await;

    assert_eq!(reply, UserReply::not_found(KNOWN_ID));
}

#[tokio::test]
async fn get_rejects_malformed_id_without_storage_call() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().never();

    let request = ValidationRequest::new().with_param(USER_ID_PARAM, "42");
    let reply = make_service(repo).get_user(request).await;

    assert!(matches!(reply, UserReply::Invalid(_)));
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id_and_update()
        .withf(|_, patch: &UserPatch| {
            patch.name == Some(UserName::new("Bob").expect("valid name"))
                && patch.email.is_none()
                && patch.status == Some(UserStatus::Disabled)
        })
        .times(1)
        .returning(|_, _| Ok(Some(user("Bob", "a@x.com", UserStatus::Disabled))));

    let request = by_id().with_body(json!({ "name": "  Bob  ", "status": "disabled" }));
    let updated = make_service(repo)
        .update_user(request)
        .await
        .into_success()
        .expect("user updated");

    assert_eq!(updated.name().to_string(), "Bob");
    assert_eq!(updated.status(), UserStatus::Disabled);
}

#[tokio::test]
async fn update_with_empty_patch_reads_the_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id_and_update().never();
    repo.expect_find_by_id()
        .times(1)
        .returning(|_| Ok(Some(user("Ada", "a@x.com", UserStatus::Enabled))));

    let reply = make_service(repo)
        .update_user(by_id().with_body(json!({})))
        .await;

    assert!(reply.into_success().is_some());
}

#[tokio::test]
async fn update_returns_not_found_when_no_document_matches() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id_and_update()
        .times(1)
        .returning(|_, _| Ok(None));

    let reply = make_service(repo)
        .update_user(by_id().with_body(json!({ "status": "enabled" })))
        .await;

    assert_eq!(reply, UserReply::not_found(KNOWN_ID));
}
