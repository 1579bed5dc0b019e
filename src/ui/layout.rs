//! Layout components (form area, status bar)

use crate::app::App;
use crate::validation::live_errors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submit gate
    let invalid = live_errors(app.state.form.session().details()).len();
    if invalid == 0 {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
        spans.push(Span::raw("ready to submit"));
    } else {
        spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red)));
        let noun = if invalid == 1 { "field" } else { "fields" };
        spans.push(Span::styled(
            format!("{invalid} {noun} incomplete"),
            Style::default().fg(Color::Gray),
        ));
    }

    // Status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
