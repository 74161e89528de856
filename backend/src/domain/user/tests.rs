//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "507f1f77bcf86cd799439011";

#[fixture]
fn ada() -> User {
    User::new(
        UserId::new(VALID_ID).expect("valid id"),
        UserName::new("Ada").expect("valid name"),
        EmailAddress::new("ada@example.com").expect("valid email"),
        UserStatus::Enabled,
    )
}

#[rstest]
#[case(VALID_ID)]
#[case("507F1F77BCF86CD799439011")]
#[case("507f1F77bcF86cd799439011")]
fn user_id_accepts_document_ids_in_lowercase_form(#[case] raw: &str) {
    let id = UserId::new(raw).expect("document id");
    assert_eq!(id.as_ref(), VALID_ID);
}

#[rstest]
fn user_ids_differing_only_in_case_are_equal() {
    assert_eq!(
        UserId::new("507F1F77BCF86CD799439011"),
        UserId::new(VALID_ID)
    );
}

#[rstest]
#[case("")]
#[case("507f1f77bcf86cd79943901")]
#[case("507f1f77bcf86cd7994390111")]
#[case("507f1f77bcf86cd79943901z")]
#[case(" 507f1f77bcf86cd799439011")]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
fn user_id_rejects_other_formats(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
}

#[rstest]
fn user_name_rejects_empty_text() {
    assert_eq!(UserName::new(""), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case("ada@example.com", true)]
#[case("first.last+tag@sub.example.org", true)]
#[case("not-an-email", false)]
#[case("missing@", false)]
#[case("", false)]
fn email_syntax_is_checked(#[case] raw: &str, #[case] valid: bool) {
    assert_eq!(EmailAddress::new(raw).is_ok(), valid);
}

#[rstest]
#[case("enabled", Ok(UserStatus::Enabled))]
#[case("disabled", Ok(UserStatus::Disabled))]
#[case("archived", Err(UserValidationError::UnknownStatus))]
#[case("Enabled", Err(UserValidationError::UnknownStatus))]
fn status_parses_wire_values(
    #[case] raw: &str,
    #[case] expected: Result<UserStatus, UserValidationError>,
) {
    assert_eq!(raw.parse::<UserStatus>(), expected);
}

#[rstest]
fn user_serialises_without_credential_fields(ada: User) {
    let value = serde_json::to_value(&ada).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "name": "Ada",
            "email": "ada@example.com",
            "status": "enabled"
        })
    );
}

#[rstest]
fn deserialisation_enforces_invariants() {
    let result: Result<User, _> = serde_json::from_value(json!({
        "id": "nope",
        "name": "Ada",
        "email": "ada@example.com",
        "status": "enabled"
    }));
    assert!(result.is_err());
}

#[rstest]
fn patched_changes_only_supplied_fields(ada: User) {
    let patch = UserPatch {
        status: Some(UserStatus::Disabled),
        ..UserPatch::default()
    };

    let updated = ada.clone().patched(&patch);

    assert_eq!(updated.status(), UserStatus::Disabled);
    assert_eq!(updated.name(), ada.name());
    assert_eq!(updated.email(), ada.email());
    assert_eq!(updated.id(), ada.id());
}

#[rstest]
fn empty_patch_reports_empty() {
    assert!(UserPatch::default().is_empty());
    let patch = UserPatch {
        name: Some(UserName::new("Bob").expect("valid name")),
        ..UserPatch::default()
    };
    assert!(!patch.is_empty());
}

#[rstest]
fn new_users_start_enabled() {
    let record = NewUser::enabled(
        UserName::new("Ada").expect("valid name"),
        EmailAddress::new("ada@example.com").expect("valid email"),
    );
    assert_eq!(record.status, UserStatus::Enabled);
}
