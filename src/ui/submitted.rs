//! Thank-you screen shown after a submission that keeps its values

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the submitted record
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success));

    let mut lines = vec![
        Line::from(Span::styled(
            "Cảm ơn! Your registration has been received.",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for binding in app.form.bindings() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", binding.label),
                Style::default().fg(theme.muted),
            ),
            Span::raw(binding.value.display_value()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to start a new registration",
        Style::default().fg(theme.primary),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
