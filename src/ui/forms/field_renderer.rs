//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What to render for one field
pub struct FieldView<'a> {
    pub field: &'a FormField,
    pub value: &'a str,
    /// Message to show, already filtered by touch state
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub mask_passwords: bool,
}

/// Draw a form field with its error message on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let border_style = match (view.is_active, view.error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = view.field.display_value(view.value, view.mask_passwords);

    let mut spans = Vec::new();
    if view.field.is_select() {
        let arrow_style = if view.is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("‹ ", arrow_style));
        spans.push(Span::raw(display_value));
        spans.push(Span::styled(" ›", arrow_style));
    } else if view.value.is_empty() {
        spans.push(Span::styled(
            view.field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::raw(display_value));
    }
    if view.is_active && !view.field.is_select() {
        // Cursor sits after the value, before any placeholder
        let at = if view.value.is_empty() { 0 } else { spans.len() };
        spans.insert(at, Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .title(format!(" {} ", view.field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the help line at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in entries {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
