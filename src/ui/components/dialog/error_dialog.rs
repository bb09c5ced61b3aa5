//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::ui::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, theme: &Theme) {
    let key_style = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            color: theme.error,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
