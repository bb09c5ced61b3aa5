//! Base dialog component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint shown under the message
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let inner_width = config.max_width.saturating_sub(4).max(1);

    // Rough line count after wrapping, for sizing only
    let message_lines: u16 = config
        .message
        .split('\n')
        .map(|line| (line.chars().count() as u16).div_ceil(inner_width).max(1))
        .sum();
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (message_lines + hint_lines + 2).max(5).min(area.height);
    let width = config.max_width.min(area.width);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut lines: Vec<Line> = config.message.split('\n').map(Line::from).collect();
    if let Some(hint) = config.hint {
        lines.push(Line::from(""));
        lines.push(hint.alignment(Alignment::Center));
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.color))
        .style(Style::default().bg(Color::Black));

    let dialog = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
