//! Application state definitions

use super::forms::ContactForm;
use crate::config::FormConfig;
use std::collections::VecDeque;

/// Top-level state rendered by the UI
#[derive(Debug, Clone)]
pub struct AppState {
    /// The contact form being edited
    pub form: ContactForm,
    /// Render password fields masked
    pub mask_passwords: bool,
    /// Confirmation shown after an accepted submit
    pub notice: Option<String>,
    /// Status bar message, cleared on the next key press
    pub status_message: Option<String>,
    /// Pending error messages, shown one at a time
    errors: VecDeque<String>,
}

impl AppState {
    /// Build the initial state from user configuration
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            form: ContactForm::with_initial_focus(config.initial_focus_field()),
            mask_passwords: config.mask_passwords.unwrap_or(true),
            notice: None,
            status_message: None,
            errors: VecDeque::new(),
        }
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Whether a modal dialog is covering the form
    pub fn has_modal(&self) -> bool {
        self.has_errors() || self.notice.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}
