//! Per-field rule tables
//!
//! Each field has an ordered list of rules. Rules are checked top to bottom
//! and only the first failure is reported.

use super::field::{ContactDetails, FieldId};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const FIRST_NAME_TOO_SHORT: &str = "First name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const MOBILE_REQUIRED: &str = "Mobile number is required";
pub const MOBILE_INVALID: &str = "Enter a valid mobile number";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Please fill at least 8 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm password is required";
pub const PASSWORD_MISMATCH: &str = "New password and confirm password must be same";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,})+$").expect("email pattern compiles")
});

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{9,13}$").expect("mobile pattern compiles"));

/// A failed rule for one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: FieldId,
    pub message: &'static str,
}

/// Patterns a value may be required to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Mobile,
}

impl Pattern {
    pub fn is_match(self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_RE.is_match(value),
            Pattern::Mobile => MOBILE_RE.is_match(value),
        }
    }
}

/// A single check on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming whitespace
    Required(&'static str),
    /// At least `min` characters, optionally counted after trimming
    MinChars {
        min: usize,
        trim: bool,
        message: &'static str,
    },
    /// Whole value matches the pattern
    Matches(Pattern, &'static str),
    /// Exactly equal to another field's value
    EqualsField(FieldId, &'static str),
}

impl Rule {
    /// Run the rule against `value`, returning its message on failure
    pub fn check(&self, value: &str, details: &ContactDetails) -> Option<&'static str> {
        let passed = match *self {
            Rule::Required(_) => !value.trim().is_empty(),
            Rule::MinChars { min, trim, .. } => {
                let counted = if trim { value.trim() } else { value };
                counted.chars().count() >= min
            }
            Rule::Matches(pattern, _) => pattern.is_match(value),
            Rule::EqualsField(other, _) => value == details.value(other),
        };
        if passed {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Rule::Required(msg)
            | Rule::MinChars { message: msg, .. }
            | Rule::Matches(_, msg)
            | Rule::EqualsField(_, msg) => msg,
        }
    }
}

const FIRST_NAME_RULES: &[Rule] = &[
    Rule::Required(FIRST_NAME_REQUIRED),
    Rule::MinChars {
        min: 2,
        trim: true,
        message: FIRST_NAME_TOO_SHORT,
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule::Required(EMAIL_REQUIRED),
    Rule::Matches(Pattern::Email, EMAIL_INVALID),
];

const MOBILE_RULES: &[Rule] = &[
    Rule::Required(MOBILE_REQUIRED),
    Rule::Matches(Pattern::Mobile, MOBILE_INVALID),
];

const PASSWORD_RULES: &[Rule] = &[
    Rule::Required(PASSWORD_REQUIRED),
    Rule::MinChars {
        min: 8,
        trim: false,
        message: PASSWORD_TOO_SHORT,
    },
];

const CONFIRM_PASSWORD_RULES: &[Rule] = &[
    Rule::Required(CONFIRM_PASSWORD_REQUIRED),
    Rule::EqualsField(FieldId::Password, PASSWORD_MISMATCH),
];

/// Rules for a field, in priority order
pub fn rules_for(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::Gender => &[],
        FieldId::FirstName => FIRST_NAME_RULES,
        FieldId::Email => EMAIL_RULES,
        FieldId::Mobile => MOBILE_RULES,
        FieldId::Password => PASSWORD_RULES,
        FieldId::ConfirmPassword => CONFIRM_PASSWORD_RULES,
    }
}

/// Validate one field against the live values, reporting the first failing rule
pub fn validate_field(field: FieldId, details: &ContactDetails) -> Option<FieldError> {
    let value = details.value(field);
    rules_for(field)
        .iter()
        .find_map(|rule| rule.check(value, details))
        .map(|message| FieldError { field, message })
}

/// Every field error against the live values, ignoring touch state
pub fn live_errors(details: &ContactDetails) -> Vec<FieldError> {
    FieldId::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, details))
        .collect()
}
