//! Per-operation validation rule sets.
//!
//! Rules are plain data: the executor interprets them. Each field rule lists
//! its sanitizers (applied in order, result written back to the request) and
//! its checks (all evaluated, each yielding at most one violation).

use crate::domain::UserStatus;

use super::{Location, USER_ID_PARAM, UserOperation, sanitize};

/// Text transform applied to a field before its checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    /// Remove surrounding whitespace.
    Trim,
    /// Replace markup-significant characters with entities.
    Escape,
    /// Drop low control characters.
    StripLow,
}

impl Sanitizer {
    /// Apply the transform.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Trim => sanitize::trim(input),
            Self::Escape => sanitize::escape(input),
            Self::StripLow => sanitize::strip_low(input),
        }
    }
}

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The field must be present.
    Required { message: &'static str },
    /// The field text must not be empty.
    NotEmpty { message: &'static str },
    /// The field must be a syntactically valid email address.
    Email { message: &'static str },
    /// The field must be a storage document identifier.
    DocumentId { message: &'static str },
    /// The field must equal one of `allowed`.
    OneOf {
        allowed: &'static [&'static str],
        message: &'static str,
    },
    /// No other user may already hold the email address.
    ///
    /// This is the only check that suspends: it queries the injected
    /// [`crate::domain::ports::EmailDirectory`].
    EmailAvailable { message: &'static str },
}

/// Constraints for one field of one request location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Where the field is read from.
    pub location: Location,
    /// Field name within the location.
    pub field: &'static str,
    /// Optional fields are skipped entirely when absent.
    pub optional: bool,
    /// Transforms applied before checking.
    pub sanitizers: &'static [Sanitizer],
    /// Constraints, evaluated in order without short-circuiting.
    pub checks: &'static [Check],
}

const NAME_SANITIZERS: &[Sanitizer] = &[Sanitizer::Trim, Sanitizer::Escape, Sanitizer::StripLow];

const INVALID_USER_ID: &str = "Invalid userId";
const NAME_EMPTY: &str = "Name field cannot be empty";
const INVALID_EMAIL: &str = "Invalid Email";
const EMAIL_IN_USE: &str = "Email already in use";

const USER_ID_RULE: FieldRule = FieldRule {
    location: Location::Params,
    field: USER_ID_PARAM,
    optional: false,
    sanitizers: &[],
    checks: &[Check::DocumentId {
        message: INVALID_USER_ID,
    }],
};

const CREATE_USER_RULES: &[FieldRule] = &[
    FieldRule {
        location: Location::Body,
        field: "name",
        optional: false,
        sanitizers: NAME_SANITIZERS,
        checks: &[
            Check::Required {
                message: "Name field is required",
            },
            Check::NotEmpty {
                message: NAME_EMPTY,
            },
        ],
    },
    FieldRule {
        location: Location::Body,
        field: "email",
        optional: false,
        sanitizers: &[],
        checks: &[
            Check::Required {
                message: "Email field is required",
            },
            Check::Email {
                message: INVALID_EMAIL,
            },
            Check::EmailAvailable {
                message: EMAIL_IN_USE,
            },
        ],
    },
];

const GET_USER_RULES: &[FieldRule] = &[USER_ID_RULE];

const UPDATE_USER_RULES: &[FieldRule] = &[
    USER_ID_RULE,
    FieldRule {
        location: Location::Body,
        field: "name",
        optional: true,
        sanitizers: NAME_SANITIZERS,
        checks: &[Check::NotEmpty {
            message: NAME_EMPTY,
        }],
    },
    FieldRule {
        location: Location::Body,
        field: "email",
        optional: true,
        sanitizers: &[],
        checks: &[
            Check::Email {
                message: INVALID_EMAIL,
            },
            Check::EmailAvailable {
                message: EMAIL_IN_USE,
            },
        ],
    },
    FieldRule {
        location: Location::Body,
        field: "status",
        optional: true,
        sanitizers: &[],
        checks: &[Check::OneOf {
            allowed: &UserStatus::ALLOWED,
            message: "Status must be one of the following ['enabled', 'disabled']",
        }],
    },
];

/// Ordered field rules for `operation`.
///
/// # Examples
/// ```
/// use accounts::domain::validation::{UserOperation, rules_for};
///
/// assert!(rules_for(UserOperation::ListUsers).is_empty());
/// assert_eq!(rules_for(UserOperation::GetUser)[0].field, "userId");
/// ```
pub fn rules_for(operation: UserOperation) -> &'static [FieldRule] {
    match operation {
        UserOperation::CreateUser => CREATE_USER_RULES,
        UserOperation::ListUsers => &[],
        UserOperation::GetUser => GET_USER_RULES,
        UserOperation::UpdateUser => UPDATE_USER_RULES,
    }
}
