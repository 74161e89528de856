//! Non-short-circuiting rule interpreter.

use serde_json::Value;
use tracing::warn;

use crate::domain::ports::EmailDirectory;
use crate::domain::{EmailAddress, UserId, is_document_id, is_email};

use super::{
    Check, FieldRule, USER_ID_PARAM, ValidationRequest, ValidationResult, Violation, text_of,
};

const EMAIL_UNVERIFIED: &str = "Email could not be verified";

/// Run every rule against `request` and collect all violations.
///
/// Sanitized values are written back into `request`. The email directory is
/// consulted at most once per email rule and only for well-formed addresses.
/// A lookup failure becomes a violation on the field; this function never
/// fails.
pub async fn validate<D>(
    rules: &[FieldRule],
    request: &mut ValidationRequest,
    directory: &D,
) -> ValidationResult
where
    D: EmailDirectory + ?Sized,
{
    let subject = request
        .param(USER_ID_PARAM)
        .and_then(|raw| UserId::new(raw).ok());
    let mut result = ValidationResult::default();

    for rule in rules {
        let raw = request.get(rule.location, rule.field).cloned();
        if rule.optional && raw.is_none() {
            continue;
        }

        let mut text = raw.as_ref().map(text_of);
        if let Some(current) = text.as_mut()
            && !rule.sanitizers.is_empty()
        {
            *current = rule
                .sanitizers
                .iter()
                .fold(std::mem::take(current), |acc, sanitizer| {
                    sanitizer.apply(&acc)
                });
            request.set(rule.location, rule.field, Value::String(current.clone()));
        }

        for check in rule.checks {
            let outcome = run_check(*check, text.as_deref(), subject.as_ref(), directory).await;
            if let Some(message) = outcome {
                result.push(Violation {
                    location: rule.location,
                    field: rule.field.to_owned(),
                    value: raw.clone(),
                    message: message.to_owned(),
                });
            }
        }
    }

    result
}

/// Evaluate one check, returning the violation message on failure.
async fn run_check<D>(
    check: Check,
    text: Option<&str>,
    subject: Option<&UserId>,
    directory: &D,
) -> Option<&'static str>
where
    D: EmailDirectory + ?Sized,
{
    let passed = match check {
        Check::Required { .. } => text.is_some(),
        Check::NotEmpty { .. } => text.is_some_and(|value| !value.is_empty()),
        Check::Email { .. } => text.is_some_and(is_email),
        Check::DocumentId { .. } => text.is_some_and(is_document_id),
        Check::OneOf { allowed, .. } => text.is_some_and(|value| allowed.contains(&value)),
        Check::EmailAvailable { message } => {
            return email_available(text, subject, directory, message).await;
        }
    };

    (!passed).then_some(message_of(check))
}

async fn email_available<D>(
    text: Option<&str>,
    subject: Option<&UserId>,
    directory: &D,
    message: &'static str,
) -> Option<&'static str>
where
    D: EmailDirectory + ?Sized,
{
    // Absent or malformed addresses are reported by the syntax checks.
    let email = EmailAddress::new(text?).ok()?;
    match directory.email_owner(&email).await {
        Ok(Some(owner)) if Some(&owner) != subject => Some(message),
        Ok(_) => None,
        Err(error) => {
            warn!(%error, "email ownership lookup failed during validation");
            Some(EMAIL_UNVERIFIED)
        }
    }
}

fn message_of(check: Check) -> &'static str {
    match check {
        Check::Required { message }
        | Check::NotEmpty { message }
        | Check::Email { message }
        | Check::DocumentId { message }
        | Check::OneOf { message, .. }
        | Check::EmailAvailable { message } => message,
    }
}
