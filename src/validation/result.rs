//! Validation results and submit outcomes

use super::field::{ContactDetails, FieldId};
use std::collections::BTreeMap;

/// Visible error messages and the submit gate for one form snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldId, &'static str>,
    is_submittable: bool,
}

impl ValidationResult {
    pub(crate) fn new(errors: BTreeMap<FieldId, &'static str>, is_submittable: bool) -> Self {
        Self {
            errors,
            is_submittable,
        }
    }

    /// Messages that should be displayed, keyed by field
    pub fn errors(&self) -> &BTreeMap<FieldId, &'static str> {
        &self.errors
    }

    /// Displayed message for a single field
    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the live values pass every rule, regardless of what is displayed
    pub fn is_submittable(&self) -> bool {
        self.is_submittable
    }

    /// First field (in display order) with a displayed message
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed. Holds the details that were submitted.
    Accepted(ContactDetails),
    /// At least one rule failed. Holds the full, force-validated result.
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Error map to display; empty when accepted
    pub fn errors(&self) -> BTreeMap<FieldId, &'static str> {
        match self {
            Self::Accepted(_) => BTreeMap::new(),
            Self::Rejected(result) => result.errors().clone(),
        }
    }
}
