//! Field rendering utilities for forms

use crate::state::{
    format_date, segment_span, Choice, DateSegment, DrivingLicense, FieldBinding, FieldValue,
    HealthCheckStatus, TestDateConfirmation,
};
use crate::ui::Theme;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: border, content, border (error sits on the bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field from its binding, picking the control by value type
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    binding: &FieldBinding,
    is_active: bool,
    date_segment: DateSegment,
    theme: &Theme,
) {
    let content = match &binding.value {
        FieldValue::Text(value) => text_line(value, binding.key.placeholder(), is_active, theme),
        FieldValue::Date(date) => date_line(
            *date,
            binding.key.placeholder(),
            is_active,
            date_segment,
            theme,
        ),
        FieldValue::HealthCheck(selected) => {
            choice_line::<HealthCheckStatus>(*selected, is_active, theme)
        }
        FieldValue::DrivingLicense(selected) => {
            choice_line::<DrivingLicense>(*selected, is_active, theme)
        }
        FieldValue::TestDate(selected) => {
            choice_line::<TestDateConfirmation>(*selected, is_active, theme)
        }
    };

    frame.render_widget(Paragraph::new(content).block(field_block(binding, is_active, theme)), area);
}

/// Bordered block titled with the label; a required marker and the current
/// error on the bottom border
fn field_block<'a>(binding: &FieldBinding, is_active: bool, theme: &Theme) -> Block<'a> {
    let border_style = if binding.error.is_some() {
        Style::default().fg(theme.error)
    } else {
        theme.focus_style(is_active)
    };

    let title = Line::from(vec![
        Span::raw(format!(" {} ", binding.label)),
        Span::styled("* ", Style::default().fg(theme.error)),
    ]);

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = binding.error_message() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(theme.error),
        )));
    }
    block
}

fn text_line<'a>(
    value: &str,
    placeholder: Option<&'static str>,
    is_active: bool,
    theme: &Theme,
) -> Line<'a> {
    let cursor = if is_active { "▌" } else { "" };
    let mut spans = Vec::with_capacity(2);
    if value.is_empty() {
        if let Some(placeholder) = placeholder {
            spans.push(Span::styled(placeholder, Style::default().fg(theme.muted)));
        }
    } else {
        spans.push(Span::styled(value.to_string(), theme.focus_style(is_active)));
    }
    spans.push(Span::styled(cursor, Style::default().fg(theme.primary)));
    Line::from(spans)
}

/// DD/MM/YYYY with the segment under adjustment highlighted
fn date_line<'a>(
    date: Option<NaiveDate>,
    placeholder: Option<&'static str>,
    is_active: bool,
    segment: DateSegment,
    theme: &Theme,
) -> Line<'a> {
    let Some(date) = date else {
        let hint = if is_active {
            "↑/↓ to pick a date".to_string()
        } else {
            placeholder.unwrap_or_default().to_string()
        };
        return Line::from(Span::styled(hint, Style::default().fg(theme.muted)));
    };

    let shown = format_date(date);
    let style = theme.focus_style(is_active);
    if !is_active {
        return Line::from(Span::styled(shown, style));
    }

    let span = segment_span(segment);
    let highlight = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::REVERSED | Modifier::BOLD);
    Line::from(vec![
        Span::styled(shown[..span.start].to_string(), style),
        Span::styled(shown[span.clone()].to_string(), highlight),
        Span::styled(shown[span.end..].to_string(), style),
        Span::styled(
            format!("  ←/→ {}  Del clear", segment.label()),
            Style::default().fg(theme.muted),
        ),
    ])
}

/// Radio group: every option with a filled or empty marker
fn choice_line<'a, C: Choice>(selected: Option<C>, is_active: bool, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(C::OPTIONS.len() * 2);
    for option in C::OPTIONS {
        let is_selected = selected == Some(*option);
        let marker = if is_selected { "(●)" } else { "( )" };
        let style = if is_selected {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.focus_style(is_active)
        };
        spans.push(Span::styled(format!("{marker} {}", option.label()), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}
