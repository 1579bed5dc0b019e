//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{form_row_at, AppState, Form, SUBMIT_ROW};
use crate::submit::{NoticeSubmitHandler, SubmitHandler};
use crate::validation::{FieldId, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Side effect run after an accepted submit
    submitter: Box<dyn SubmitHandler>,
    /// Loaded user configuration
    config: FormConfig,
    /// Write config changes back to disk
    persist_config: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App with the given submit handler; config changes stay in memory
    pub fn new(config: FormConfig, submitter: Box<dyn SubmitHandler>) -> Self {
        Self {
            state: AppState::from_config(&config),
            submitter,
            config,
            persist_config: false,
            quit: false,
        }
    }

    /// Create the App used by the binary, confirming submissions with a notice
    pub fn from_config(config: FormConfig) -> Self {
        let handler = NoticeSubmitHandler::new(config.confirmation_message());
        let mut app = Self::new(config, Box::new(handler));
        app.persist_config = true;
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submission notice (modal)
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.notice = None;
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = &mut self.state.form;

        match key.code {
            KeyCode::Esc => self.quit = true,
            // Submit (Ctrl+S or Cmd+S)
            KeyCode::Char('s')
                if ctrl || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit().await;
            }
            KeyCode::Char('u') if ctrl => form.clear_active(),
            KeyCode::F(2) => self.toggle_password_mask(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter if form.is_submit_row_active() => self.submit().await,
            KeyCode::Enter => form.next_field(),
            KeyCode::Left => form.cycle_gender(false),
            KeyCode::Right => form.cycle_gender(true),
            KeyCode::Char(' ') if form.active_field_id() == Some(FieldId::Gender) => {
                form.cycle_gender(true)
            }
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_modal() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(row) = form_row_at(mouse.row) else {
                    return Ok(());
                };
                let form = &mut self.state.form;
                if row == SUBMIT_ROW {
                    form.set_active_field(SUBMIT_ROW);
                    self.submit().await;
                } else if row == form.active_field()
                    && form.get_field(row).is_some_and(|f| f.is_select())
                {
                    // Clicking the focused selector opens the next option
                    form.cycle_gender(true);
                } else {
                    form.set_active_field(row);
                }
            }
            MouseEventKind::ScrollDown => self.state.form.next_field(),
            MouseEventKind::ScrollUp => self.state.form.prev_field(),
            _ => {}
        }
        Ok(())
    }

    /// Attempt to submit the form and run the side effect if it is accepted
    async fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted(details) => match self.submitter.submit(&details).await {
                Ok(notice) => self.state.notice = Some(notice),
                Err(err) => self.push_error(format!("Failed to submit: {err}")),
            },
            SubmitOutcome::Rejected(result) => {
                let count = result.errors().len();
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{count} {noun} attention"));
            }
        }
    }

    /// Toggle password masking and remember the choice
    fn toggle_password_mask(&mut self) {
        self.state.mask_passwords = !self.state.mask_passwords;
        self.config.mask_passwords = Some(self.state.mask_passwords);

        if self.persist_config {
            if let Err(err) = self.config.save() {
                self.push_error(format!("Failed to save config: {err}"));
            }
        }
    }
}
