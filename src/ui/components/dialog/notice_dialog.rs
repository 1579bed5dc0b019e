//! Notice dialog shown after an accepted submit

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the submission notice centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            color: Color::Green,
            message,
            hint: Some(key_hint(&["Enter"], "to fill in another")),
            max_width: 64,
        },
    );
}
