//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{BUTTON_HEIGHT, FIELD_HEIGHT, SUBMIT_ROW};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let result = form.result();

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Contact Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            FieldView {
                field,
                value: form.value(field.id),
                error: result.error(field.id),
                is_active: form.active_field_index == idx,
                mask_passwords: app.state.mask_passwords,
            },
        );
    }

    let button_area = Rect {
        width: chunks[SUBMIT_ROW].width.min(16),
        ..chunks[SUBMIT_ROW]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_row_active(),
        result.is_submittable(),
    );

    draw_help_text(
        frame,
        chunks[SUBMIT_ROW + 1],
        &[
            ("Tab", "next"),
            ("←/→", "gender"),
            (SUBMIT_SHORTCUT, "submit"),
            ("F2", "show/hide passwords"),
            ("Esc", "quit"),
        ],
    );
}
