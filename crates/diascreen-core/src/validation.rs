//! Form validation rules.
//!
//! Each validator is a pure function of its input and returns a freshly
//! computed [`ErrorMap`]. The rules are a fixed list per form; there is no
//! runtime field introspection.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::credentials::Credentials;
use crate::models::patient::PatientForm;
use crate::models::signup::SignupForm;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+")
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

const MIN_PASSWORD_LEN: usize = 8;

/// Every input field a validator can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
    FirstName,
    LastName,
    Gender,
    Age,
    Nationality,
    Name,
}

impl Field {
    /// Signup fields in the order their required-check runs.
    pub const SIGNUP: [Field; 7] = [
        Field::Email,
        Field::Password,
        Field::FirstName,
        Field::LastName,
        Field::Gender,
        Field::Age,
        Field::Nationality,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::Nationality => "nationality",
            Field::Name => "name",
        }
    }

    /// The key with its first underscore turned into a space.
    pub fn label(&self) -> String {
        self.key().replacen('_', " ", 1)
    }
}

/// Field → message. A missing entry and an empty message both mean "valid".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message, replacing any earlier one for the same field.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Fields carrying a non-empty message, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parse user-typed numeric text. Surrounding whitespace is ignored;
/// non-finite values are rejected.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

// Length in UTF-16 code units, so a surrogate pair counts as two.
fn is_short_password(password: &str) -> bool {
    password.encode_utf16().count() < MIN_PASSWORD_LEN
}

/// Login rules. The email and password checks are independent.
pub fn validate_login(credentials: &Credentials) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if credentials.email.is_empty() {
        errors.set(Field::Email, "Email is required.");
    } else if !is_valid_email(&credentials.email) {
        errors.set(Field::Email, "Enter a valid email.");
    }

    if credentials.password.is_empty() {
        errors.set(Field::Password, "Password is required.");
    } else if is_short_password(&credentials.password) {
        errors.set(Field::Password, "Password must be at least 8 characters.");
    }

    errors
}

/// Signup rules.
///
/// All seven fields get a required-check first. The format checks on
/// email, password and age run afterwards over non-empty values and
/// overwrite whatever the required-check left for that field.
pub fn validate_signup(form: &SignupForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in Field::SIGNUP {
        if signup_value_missing(form, field) {
            errors.set(field, format!("{} is required", field.label()));
        }
    }

    if !form.email.is_empty() && !is_valid_email(&form.email) {
        errors.set(Field::Email, "Invalid email format");
    }

    if !form.password.is_empty() && is_short_password(&form.password) {
        errors.set(Field::Password, "Password must be at least 8 characters");
    }

    if !form.age.is_empty() && !is_positive_age(&form.age) {
        errors.set(Field::Age, "Age must be a positive number");
    }

    errors
}

fn signup_value_missing(form: &SignupForm, field: Field) -> bool {
    match field {
        Field::Email => form.email.is_empty(),
        Field::Password => form.password.is_empty(),
        Field::FirstName => form.first_name.is_empty(),
        Field::LastName => form.last_name.is_empty(),
        Field::Gender => form.gender.is_none(),
        Field::Age => form.age.is_empty(),
        Field::Nationality => form.nationality.is_empty(),
        Field::Name => false,
    }
}

/// Signup age as registered: the integer part of the input, which must lie
/// in `1..=u32::MAX`. So "0.5" is rejected while "1.5" gives 1.
pub fn signup_age(age: &str) -> Option<u32> {
    parse_number(age)
        .map(f64::trunc)
        .filter(|n| *n >= 1.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

fn is_positive_age(age: &str) -> bool {
    signup_age(age).is_some()
}

/// Questionnaire entry rules. Age must be numeric but may be zero or
/// negative; unlike signup there is no positivity check.
pub fn validate_patient(form: &PatientForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.name.trim().is_empty() {
        errors.set(Field::Name, "Name is required");
    }

    if form.age.trim().is_empty() {
        errors.set(Field::Age, "Age is required");
    } else if parse_number(&form.age).is_none() {
        errors.set(Field::Age, "Age must be a number");
    }

    errors
}
