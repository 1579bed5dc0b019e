//! Form field view objects

use crate::validation::{FieldId, Gender};

/// How a field accepts and displays input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Option selector cycled with arrow keys
    Select,
    /// Free text
    Text,
    /// Email text
    Email,
    /// Digits with an optional leading `+`
    Tel,
    /// Text rendered masked
    Password,
}

/// Represents a single form field with its presentation
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
}

impl FormField {
    /// Create the presentation for a form field
    pub fn for_id(id: FieldId) -> Self {
        let (label, placeholder, kind) = match id {
            FieldId::Gender => ("Gender:", "select", InputKind::Select),
            FieldId::FirstName => ("First name:", "First Name", InputKind::Text),
            FieldId::Email => ("Email:", "Email Address", InputKind::Email),
            FieldId::Mobile => ("Mobile:", "mobile", InputKind::Tel),
            FieldId::Password => ("Password:", "Password", InputKind::Password),
            FieldId::ConfirmPassword => {
                ("Confirm Password:", "confirm Password", InputKind::Password)
            }
        };
        Self {
            id,
            label,
            placeholder,
            kind,
        }
    }

    /// Whether a typed character is accepted at the keyboard level.
    ///
    /// Only phone fields filter input; the validator still checks the whole
    /// value.
    pub fn accepts_char(&self, c: char, current: &str) -> bool {
        match self.kind {
            InputKind::Select => false,
            InputKind::Tel => c.is_ascii_digit() || (c == '+' && current.is_empty()),
            InputKind::Text | InputKind::Email | InputKind::Password => !c.is_control(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, value: &str, mask_passwords: bool) -> String {
        match self.kind {
            InputKind::Select => Gender::from_option_value(value).label().to_string(),
            InputKind::Password if mask_passwords => "•".repeat(value.chars().count()),
            _ => value.to_string(),
        }
    }

    pub fn is_select(&self) -> bool {
        self.kind == InputKind::Select
    }
}
