//! Request validation for user account operations.
//!
//! Purpose: describe the constraints of each operation as data
//! ([`rules_for`]), run them against a [`ValidationRequest`] without stopping
//! at the first failure ([`validate`]) and report every violation in a
//! [`ValidationResult`].
//!
//! Sanitizers rewrite the request in place, so once validation passes the
//! operation reads the cleaned values straight from the request.

mod executor;
mod rules;
pub mod sanitize;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use executor::validate;
pub use rules::{Check, FieldRule, Sanitizer, rules_for};

/// Name of the path parameter carrying the user identifier.
pub const USER_ID_PARAM: &str = "userId";

/// The account operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserOperation {
    /// Register a new user.
    CreateUser,
    /// List every user.
    ListUsers,
    /// Fetch one user by id.
    GetUser,
    /// Patch one user by id.
    UpdateUser,
}

impl UserOperation {
    /// Operation name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateUser => "createUser",
            Self::ListUsers => "listUsers",
            Self::GetUser => "getUser",
            Self::UpdateUser => "updateUser",
        }
    }

    /// Fixed message returned alongside a storage failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::CreateUser => "There was a problem creating the user.",
            Self::ListUsers | Self::GetUser | Self::UpdateUser => {
                "There was a problem finding the users."
            }
        }
    }
}

/// Part of the request a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// JSON request body.
    Body,
    /// Path parameters.
    Params,
    /// Query string.
    Query,
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Where the field was read from.
    pub location: Location,
    /// Field name.
    #[serde(rename = "param")]
    pub field: String,
    /// The rejected value as received; omitted when the field was absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Human-readable explanation.
    #[serde(rename = "msg")]
    pub message: String,
}

impl Violation {
    /// Locator reported when no user has the requested id.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::validation::{Location, Violation};
    ///
    /// let locator = Violation::user_not_found("507f1f77bcf86cd799439011");
    /// assert_eq!(locator.location, Location::Params);
    /// assert_eq!(locator.message, "User not found");
    /// ```
    pub fn user_not_found(user_id: &str) -> Self {
        Self {
            location: Location::Params,
            field: USER_ID_PARAM.to_owned(),
            value: Some(Value::String(user_id.to_owned())),
            message: "User not found".to_owned(),
        }
    }
}

/// Ordered violations; empty means the request is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// `true` when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in rule order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the result, returning the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl From<Vec<Violation>> for ValidationResult {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

/// Raw request data, keyed by location.
///
/// # Examples
/// ```
/// use accounts::domain::validation::{Location, ValidationRequest};
/// use serde_json::json;
///
/// let request = ValidationRequest::new()
///     .with_param("userId", "507f1f77bcf86cd799439011")
///     .with_body(json!({ "name": "Ada" }));
/// assert_eq!(request.get(Location::Body, "name"), Some(&json!("Ada")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationRequest {
    params: Map<String, Value>,
    body: Map<String, Value>,
    query: Map<String, Value>,
}

impl ValidationRequest {
    /// Empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path parameter.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params
            .insert(name.to_owned(), Value::String(value.into()));
        self
    }

    /// Use `body` as the request body. Anything but a JSON object counts as
    /// an empty body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = match body {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        self
    }

    /// Add a query string parameter.
    #[must_use]
    pub fn with_query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query
            .insert(name.to_owned(), Value::String(value.into()));
        self
    }

    /// Value of `field` at `location`, if present.
    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        self.fields(location).get(field)
    }

    /// Text of a string path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    pub(crate) fn set(&mut self, location: Location, field: &str, value: Value) {
        let fields = match location {
            Location::Body => &mut self.body,
            Location::Params => &mut self.params,
            Location::Query => &mut self.query,
        };
        fields.insert(field.to_owned(), value);
    }

    fn fields(&self, location: Location) -> &Map<String, Value> {
        match location {
            Location::Body => &self.body,
            Location::Params => &self.params,
            Location::Query => &self.query,
        }
    }
}

/// Text form of a JSON value as seen by the checks.
///
/// `null`, arrays and objects read as empty text; numbers and booleans use
/// their JSON spelling.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
