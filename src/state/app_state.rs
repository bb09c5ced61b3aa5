//! Application state definitions

use super::forms::FieldKey;
use chrono::{Days, Months, NaiveDate};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The registration form being filled in
    #[default]
    Form,
    /// Thank-you screen showing the submitted record
    Submitted,
}

/// Buttons in the form's action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Clear,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Clear];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Clear => "Clear Form",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Clear,
            Self::Clear => Self::Submit,
        }
    }
}

/// Part of the date picker that Up/Down adjusts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSegment {
    #[default]
    Day,
    Month,
    Year,
}

impl DateSegment {
    pub fn next(&self) -> Self {
        match self {
            Self::Day => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Day,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Day => Self::Year,
            Self::Month => Self::Day,
            Self::Year => Self::Month,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Date the picker starts from when no date is chosen yet
pub fn default_picker_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Move `date` by `delta` units of `segment`.
///
/// Month and year steps clamp the day to the end of the target month
/// (31/01 + 1 month = 29/02 in a leap year). Out-of-range results leave the
/// date unchanged.
pub fn step_date(date: NaiveDate, segment: DateSegment, delta: i32) -> NaiveDate {
    let magnitude = delta.unsigned_abs();
    let stepped = match segment {
        DateSegment::Day => {
            let days = Days::new(u64::from(magnitude));
            if delta >= 0 {
                date.checked_add_days(days)
            } else {
                date.checked_sub_days(days)
            }
        }
        DateSegment::Month | DateSegment::Year => {
            let months = if segment == DateSegment::Year {
                magnitude.saturating_mul(12)
            } else {
                magnitude
            };
            if delta >= 0 {
                date.checked_add_months(Months::new(months))
            } else {
                date.checked_sub_months(Months::new(months))
            }
        }
    };
    stepped.unwrap_or(date)
}

/// Character range of `segment` inside a DD/MM/YYYY rendering
pub fn segment_span(segment: DateSegment) -> std::ops::Range<usize> {
    match segment {
        DateSegment::Day => 0..2,
        DateSegment::Month => 3..5,
        DateSegment::Year => 6..10,
    }
}

/// Number of focusable rows: the six fields plus the action panel
pub const FORM_FOCUS_COUNT: usize = FieldKey::ALL.len() + 1;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form focus
    pub active_form_field: usize,
    pub form_selected_button: FormButton,
    pub date_segment: DateSegment,

    // Feedback
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Move to next form field (wraps from the action panel to the first field)
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % FORM_FOCUS_COUNT;
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = FORM_FOCUS_COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Focus a specific field
    pub fn focus_field(&mut self, key: FieldKey) {
        if let Some(idx) = FieldKey::ALL.iter().position(|k| *k == key) {
            self.active_form_field = idx;
        }
    }

    /// The focused field, or `None` when the action panel has focus
    pub fn active_field_key(&self) -> Option<FieldKey> {
        FieldKey::ALL.get(self.active_form_field).copied()
    }

    pub fn is_action_panel_focused(&self) -> bool {
        self.active_form_field == FieldKey::ALL.len()
    }

    /// Reset focus to the first field
    pub fn reset_focus(&mut self) {
        self.active_form_field = 0;
        self.form_selected_button = FormButton::default();
        self.date_segment = DateSegment::default();
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the modal dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
