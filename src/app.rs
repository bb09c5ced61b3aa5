//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::sink::{self, SubmissionSink};
use crate::state::{
    default_picker_date, step_date, AppState, Choice, DrivingLicense, FieldKey, FieldKind,
    FieldValue, FormButton, FormController, FormPhase, HealthCheckStatus, SubmitError,
    TestDateConfirmation, View,
};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// The registration form
    pub form: FormController,
    /// Where validated submissions are delivered
    sink: Box<dyn SubmissionSink>,
    /// Colours injected into the UI
    pub theme: Theme,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the sink selected by `config`
    pub fn new(config: &RegistrationConfig) -> Self {
        Self::with_sink(config, sink::from_config(config))
    }

    /// Create a new App instance delivering submissions to `sink`
    pub fn with_sink(config: &RegistrationConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let form = FormController::new(config.form_options());
        tracing::info!(options = ?form.options(), "form mounted");
        Self {
            state: AppState::default(),
            form,
            sink,
            theme: Theme::from_config(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Form => self.handle_form_key(key).await,
            View::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    /// Whether `key` is the shortcut for `c` (Ctrl, or Cmd on macOS)
    fn is_shortcut(key: &KeyEvent, c: char) -> bool {
        key.code == KeyCode::Char(c)
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(SHORTCUT_MODIFIER))
    }

    /// Handle keys in the form view
    async fn handle_form_key(&mut self, key: KeyEvent) {
        if Self::is_shortcut(&key, 's') {
            self.submit_form().await;
            return;
        }
        if Self::is_shortcut(&key, 'r') {
            self.clear_form();
            return;
        }

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            _ => match self.state.active_field_key() {
                Some(field) => self.handle_field_key(field, key),
                None => self.handle_action_panel_key(key).await,
            },
        }
    }

    /// Handle keys when the action panel (Submit / Clear Form) is focused
    async fn handle_action_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                self.state.form_selected_button = self.state.form_selected_button.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form_selected_button {
                FormButton::Submit => self.submit_form().await,
                FormButton::Clear => self.clear_form(),
            },
            _ => {}
        }
    }

    /// Route a key to the focused field's control
    fn handle_field_key(&mut self, field: FieldKey, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.state.next_form_field();
            return;
        }

        match field.kind() {
            FieldKind::Text => self.handle_text_key(field, key),
            FieldKind::Date => self.handle_date_key(key),
            FieldKind::HealthCheck => {
                if let Some(forward) = Self::choice_direction(&key) {
                    let value = cycle::<HealthCheckStatus>(
                        self.form.state().health_check_status,
                        forward,
                    );
                    self.set_field(field, FieldValue::HealthCheck(value));
                }
            }
            FieldKind::DrivingLicense => {
                if let Some(forward) = Self::choice_direction(&key) {
                    let value =
                        cycle::<DrivingLicense>(self.form.state().has_driving_license, forward);
                    self.set_field(field, FieldValue::DrivingLicense(value));
                }
            }
            FieldKind::TestDate => {
                if let Some(forward) = Self::choice_direction(&key) {
                    let value = cycle::<TestDateConfirmation>(
                        self.form.state().test_date_confirmation,
                        forward,
                    );
                    self.set_field(field, FieldValue::TestDate(value));
                }
            }
        }
    }

    /// Left/Up move backward through a radio group; Right/Down/Space move forward
    fn choice_direction(key: &KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => Some(false),
            KeyCode::Right
            | KeyCode::Down
            | KeyCode::Char(' ')
            | KeyCode::Char('l')
            | KeyCode::Char('j') => Some(true),
            _ => None,
        }
    }

    fn handle_text_key(&mut self, field: FieldKey, key: KeyEvent) {
        let mut text = self.form.state().value(field).as_text().to_string();
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                text.push(c);
            }
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }
        self.set_field(field, FieldValue::Text(text));
    }

    /// Date picker: Left/Right pick the segment, Up/Down adjust it
    fn handle_date_key(&mut self, key: KeyEvent) {
        let current = self.form.state().date_of_birth;
        let delta = match key.code {
            KeyCode::Left => {
                self.state.date_segment = self.state.date_segment.prev();
                return;
            }
            KeyCode::Right => {
                self.state.date_segment = self.state.date_segment.next();
                return;
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if current.is_some() {
                    self.set_field(FieldKey::DateOfBirth, FieldValue::Date(None));
                }
                return;
            }
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => 1,
            KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => -1,
            KeyCode::Char(' ') if current.is_none() => 0,
            _ => return,
        };

        // The first adjustment only opens the picker on its default date
        let date = match current {
            Some(date) => step_date(date, self.state.date_segment, delta),
            None => default_picker_date(),
        };
        self.set_field(FieldKey::DateOfBirth, FieldValue::Date(Some(date)));
    }

    fn set_field(&mut self, field: FieldKey, value: FieldValue) {
        if let Err(err) = self.form.set_field(field, value) {
            self.push_error(err.to_string());
        }
    }

    /// Validate and submit the form through the sink
    async fn submit_form(&mut self) {
        match self.form.submit(self.sink.as_ref()).await {
            Ok(_) => {
                if self.form.phase() == FormPhase::Submitted {
                    self.state.current_view = View::Submitted;
                    self.state.status_message = Some("Registration submitted!".to_string());
                } else {
                    self.state.reset_focus();
                    self.state.status_message =
                        Some("Registration submitted! Ready for the next entry.".to_string());
                }
            }
            Err(SubmitError::Invalid(errors)) => {
                if let Some((field, _)) = errors.first() {
                    self.state.focus_field(field);
                }
                let count = errors.len();
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{count} {noun} attention"));
            }
            Err(SubmitError::AlreadySubmitted) => {
                self.state.current_view = View::Submitted;
            }
            Err(err @ SubmitError::Sink(_)) => {
                self.push_error(format!("Failed to submit registration: {err}"));
            }
        }
    }

    /// Reset the form and return to the first field
    fn clear_form(&mut self) {
        self.form.clear();
        self.state.reset_focus();
        self.state.current_view = View::Form;
        self.state.status_message = Some("Form cleared".to_string());
    }

    /// Handle keys on the thank-you screen
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        if Self::is_shortcut(&key, 'r') || key.code == KeyCode::Enter {
            self.clear_form();
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit = true;
        }
    }
}

/// Step a radio group forward or backward
fn cycle<C: Choice>(current: Option<C>, forward: bool) -> Option<C> {
    if forward {
        C::cycle_next(current)
    } else {
        C::cycle_prev(current)
    }
}
