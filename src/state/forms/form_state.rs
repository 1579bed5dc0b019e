//! Contact form state: focus and editing on top of the validation session

use super::field::FormField;
use crate::validation::{FieldId, FormSession, SubmitOutcome, ValidationResult};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button row, after the last field
pub const SUBMIT_ROW: usize = FieldId::ALL.len();

fn field_index(field: FieldId) -> usize {
    FieldId::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

/// The contact form as shown on screen
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    session: FormSession,
    result: ValidationResult,
    initial_focus: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_initial_focus(FieldId::Gender)
    }

    /// Create a form that focuses `field` on mount and after each accepted submit
    pub fn with_initial_focus(field: FieldId) -> Self {
        let session = FormSession::new();
        let result = session.result();
        let initial_focus = field_index(field);
        Self {
            fields: FieldId::ALL.into_iter().map(FormField::for_id).collect(),
            active_field_index: initial_focus,
            session,
            result,
            initial_focus,
        }
    }

    /// Result after the latest event
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.session.value(field)
    }

    /// Field under focus, or `None` when the submit button is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn active_form_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    /// Move focus to a specific field
    pub fn focus_field(&mut self, field: FieldId) {
        self.set_active_field(field_index(field));
    }

    fn change_active(&mut self, value: &str) {
        if let Some(field) = self.active_field_id() {
            self.result = self.session.on_field_change(field, value);
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        let current = self.session.value(field.id);
        if !field.accepts_char(c, current) {
            return;
        }
        let mut value = current.to_string();
        value.push(c);
        self.change_active(&value);
    }

    /// Remove the last character from the active field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        if field.is_select() {
            return;
        }
        let mut value = self.session.value(field.id).to_string();
        value.pop();
        self.change_active(&value);
    }

    /// Clear the active field
    pub fn clear_active(&mut self) {
        self.change_active("");
    }

    /// Step the gender selector through its options
    pub fn cycle_gender(&mut self, forward: bool) {
        if self.active_field_id() != Some(FieldId::Gender) {
            return;
        }
        let current = self.session.details().gender;
        let next = if forward { current.next() } else { current.prev() };
        self.change_active(next.option_value());
    }

    /// Attempt to submit.
    ///
    /// A rejected submit focuses the first invalid field; an accepted one
    /// leaves a fresh form focused on the initial field.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.session.on_submit_attempt();
        self.result = self.session.result();
        match &outcome {
            SubmitOutcome::Accepted(_) => self.active_field_index = self.initial_focus,
            SubmitOutcome::Rejected(result) => {
                if let Some(field) = result.first_invalid_field() {
                    self.active_field_index = field_index(field);
                }
            }
        }
        outcome
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_ROW);
        if index == self.active_field_index {
            return;
        }
        // Leaving a field counts as touching it
        if let Some(field) = self.active_field_id() {
            self.result = self.session.on_field_blur(field);
        }
        self.active_field_index = index;
    }
}
