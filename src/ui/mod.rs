//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, errors on top
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
}
