//! Colours injected into the UI by the host configuration

use crate::config::RegistrationConfig;
use ratatui::style::{Color, Style};
use std::str::FromStr;

/// UI palette; the form controller never reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Build the palette from the configured primary colour, falling back to
    /// the default when it is missing or not a colour ratatui understands
    pub fn from_config(config: &RegistrationConfig) -> Self {
        let mut theme = Self::default();
        if let Some(name) = config.primary_color.as_deref() {
            match Color::from_str(name) {
                Ok(color) => theme.primary = color,
                Err(_) => tracing::warn!(color = name, "unknown primary colour, using default"),
            }
        }
        theme
    }

    /// Border / text style for a focused or unfocused control
    pub fn focus_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }
}
