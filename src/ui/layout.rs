//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the one-line status bar
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
    let theme = &app.theme;
    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    spans.push(Span::styled(view_hints(app), Style::default().fg(Color::Gray)));

    // Completion indicator, computed without touching the shown errors
    if app.state.current_view == View::Form {
        let missing = app.form.validate().len();
        let (text, color) = if missing == 0 {
            ("  ● ready".to_string(), theme.success)
        } else {
            (format!("  ○ {missing} left"), theme.muted)
        };
        spans.push(Span::styled(text, Style::default().fg(color)));
    }

    // Status message
    if let Some(msg) = &app.state.status_message {
        let color = if app.form.errors().is_empty() {
            theme.success
        } else {
            theme.error
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
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

/// Get keyboard hints for the current view and focus
fn view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Submitted => format!("Enter/{CLEAR_SHORTCUT}:new entry  q:quit"),
        View::Form => {
            let control = match app.state.active_field_key().map(|k| k.kind()) {
                None => "←/→:button  Enter:press",
                Some(FieldKind::Text) => "type to edit",
                Some(FieldKind::Date) => "←/→:segment  ↑/↓:adjust  Del:clear",
                Some(_) => "←/→/Space:choose",
            };
            format!("Tab:next  {control}  {SUBMIT_SHORTCUT}:submit  {CLEAR_SHORTCUT}:clear")
        }
    }
}
