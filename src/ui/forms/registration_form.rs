//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldKey, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form with its action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the header and one control per field
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let is_focused = !app.state.is_action_panel_focused();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.focus_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Header
    constraints.extend(FieldKey::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Đơn đăng ký",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Please fill out the form below.",
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    for (idx, binding) in app.form.bindings().iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            binding,
            app.state.active_form_field == idx,
            app.state.date_segment,
            theme,
        );
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let is_focused = app.state.is_action_panel_focused();

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(theme.focus_style(is_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Layout for buttons vertically
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear Form
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (idx, button) in FormButton::ALL.iter().enumerate() {
        let color = match button {
            FormButton::Submit => theme.primary,
            FormButton::Clear => theme.error,
        };
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            is_focused && app.state.form_selected_button == *button,
            color,
        );
    }
}
