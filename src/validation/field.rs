//! Field identifiers and the contact details they address

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Gender,
    FirstName,
    Email,
    Mobile,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 6] = [
        FieldId::Gender,
        FieldId::FirstName,
        FieldId::Email,
        FieldId::Mobile,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Stable field name, as used in config files and logs
    pub const fn name(self) -> &'static str {
        match self {
            FieldId::Gender => "gender",
            FieldId::FirstName => "firstName",
            FieldId::Email => "email",
            FieldId::Mobile => "mobile",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
        }
    }

    /// Whether any rule applies to this field
    pub const fn is_validated(self) -> bool {
        !matches!(self, FieldId::Gender)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a field name does not match any form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

impl FromStr for FieldId {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseFieldError::UnknownField(s.to_string()))
    }
}

/// Gender selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// The "select" sentinel option
    #[default]
    Unset,
    Male,
    Female,
}

impl Gender {
    /// Map a selector option value onto a gender.
    ///
    /// Anything other than `male` or `female` (including the `select`
    /// sentinel and the empty string) selects `Unset`.
    pub fn from_option_value(value: &str) -> Self {
        match value.trim() {
            v if v.eq_ignore_ascii_case("male") => Gender::Male,
            v if v.eq_ignore_ascii_case("female") => Gender::Female,
            _ => Gender::Unset,
        }
    }

    /// Option value submitted for this gender
    pub const fn option_value(self) -> &'static str {
        match self {
            Gender::Unset => "",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Text shown in the selector
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Unset => "select",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Gender::Unset => Gender::Male,
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Unset,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Gender::Unset => Gender::Female,
            Gender::Male => Gender::Unset,
            Gender::Female => Gender::Male,
        }
    }
}

/// Current values of every contact form field
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub gender: Gender,
    pub first_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

impl ContactDetails {
    /// Get the raw value of a field (the option value for `gender`)
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Gender => self.gender.option_value(),
            FieldId::FirstName => &self.first_name,
            FieldId::Email => &self.email,
            FieldId::Mobile => &self.mobile,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::Gender => self.gender = Gender::from_option_value(value),
            FieldId::FirstName => self.first_name = value.to_string(),
            FieldId::Email => self.email = value.to_string(),
            FieldId::Mobile => self.mobile = value.to_string(),
            FieldId::Password => self.password = value.to_string(),
            FieldId::ConfirmPassword => self.confirm_password = value.to_string(),
        }
    }
}

// Passwords never end up in logs or panic messages.
impl fmt::Debug for ContactDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactDetails")
            .field("gender", &self.gender)
            .field("first_name", &self.first_name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}
