//! Form controller: field bindings, validation timing, and the submit/clear lifecycle

use super::field::{FieldKey, FieldKind, FieldValue};
use super::form_state::{FormRecord, FormState, Submission};
use super::validation::{ValidationError, ValidationErrors};
use crate::sink::SubmissionSink;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// When field errors are recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Recompute a field's error every time it changes
    #[default]
    OnChange,
    /// Errors only refresh when the form is submitted
    OnSubmit,
}

/// Controller behavior knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormOptions {
    pub validation_mode: ValidationMode,
    /// Return to an empty form after a successful submission instead of
    /// staying on the submitted values
    pub reset_on_submit: bool,
}

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Misuse of the controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field {field} expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: FieldKey,
        expected: FieldKind,
        actual: FieldKind,
    },
    #[error("form was already submitted; clear it to start a new entry")]
    AlreadySubmitted,
}

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has validation errors: {0}")]
    Invalid(ValidationErrors),
    #[error("form was already submitted; clear it to start a new entry")]
    AlreadySubmitted,
    #[error("submission sink failed: {0:#}")]
    Sink(#[source] anyhow::Error),
}

/// What the rendering layer needs to draw one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub key: FieldKey,
    pub label: &'static str,
    pub value: FieldValue,
    pub error: Option<ValidationError>,
}

impl FieldBinding {
    /// User-facing error message, if the field currently shows one
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.message(self.key))
    }
}

/// Owns the form values and their visible errors
#[derive(Debug, Clone, Default)]
pub struct FormController {
    options: FormOptions,
    state: FormState,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl FormController {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Errors currently visible next to their fields
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Current value and error of one field
    pub fn binding(&self, key: FieldKey) -> FieldBinding {
        FieldBinding {
            key,
            label: key.label(),
            value: self.state.value(key),
            error: self.errors.get(key).copied(),
        }
    }

    /// Bindings for every field, in display order
    pub fn bindings(&self) -> Vec<FieldBinding> {
        FieldKey::ALL.iter().map(|key| self.binding(*key)).collect()
    }

    /// Update one field
    pub fn set_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        self.state.apply(key, value)?;
        if self.options.validation_mode == ValidationMode::OnChange {
            self.errors.set(key, self.state.validate_field(key));
        }
        tracing::debug!(field = %key, error = ?self.errors.get(key), "field updated");
        Ok(())
    }

    /// Full error set for the current values. Does not touch visible errors.
    pub fn validate(&self) -> ValidationErrors {
        self.state.validate()
    }

    /// Validate, then hand the record to `sink` exactly once.
    ///
    /// On validation failure every error becomes visible and the sink is not
    /// called. If the sink fails the form goes back to editing with all values
    /// kept.
    pub async fn submit<S>(&mut self, sink: &S) -> Result<FormRecord, SubmitError>
    where
        S: SubmissionSink + ?Sized,
    {
        if self.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }

        let record = match self.state.to_record() {
            Ok(record) => record,
            Err(errors) => {
                tracing::warn!(errors = %errors, "submit rejected");
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };
        self.errors.clear();

        let submission = Submission::new(record.clone());
        self.phase = FormPhase::Submitted;

        if let Err(err) = sink.submit(&submission).await {
            tracing::warn!(id = %submission.id, "submission sink failed: {err:#}");
            self.phase = FormPhase::Editing;
            return Err(SubmitError::Sink(err));
        }

        tracing::info!(id = %submission.id, "form submitted");
        if self.options.reset_on_submit {
            self.clear();
        }
        Ok(record)
    }

    /// Reset every field and error, back to editing
    pub fn clear(&mut self) {
        self.state = FormState::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
        tracing::info!("form cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSubmissionSink;
    use crate::state::{DrivingLicense, HealthCheckStatus, TestDateConfirmation};
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1999, 3, 15).unwrap()
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    /// Fill every field with valid values, using `name` and `phone` as given
    fn fill(controller: &mut FormController, name: &str, phone: &str) {
        controller.set_field(FieldKey::Name, text(name)).unwrap();
        controller.set_field(FieldKey::Phone, text(phone)).unwrap();
        controller
            .set_field(FieldKey::DateOfBirth, FieldValue::Date(Some(dob())))
            .unwrap();
        controller
            .set_field(
                FieldKey::HealthCheckStatus,
                FieldValue::HealthCheck(Some(HealthCheckStatus::Checked)),
            )
            .unwrap();
        controller
            .set_field(
                FieldKey::HasDrivingLicense,
                FieldValue::DrivingLicense(Some(DrivingLicense::Yes)),
            )
            .unwrap();
        controller
            .set_field(
                FieldKey::TestDateConfirmation,
                FieldValue::TestDate(Some(TestDateConfirmation::Confirm)),
            )
            .unwrap();
    }

    fn sink_never_called() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().never();
        sink
    }

    fn sink_called_once() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().times(1).returning(|_| Ok(()));
        sink
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_eager_mode_shows_error_on_change() {
            let mut controller = FormController::default();
            controller.set_field(FieldKey::Phone, text("12a")).unwrap();
            assert_eq!(
                controller.errors().get(FieldKey::Phone),
                Some(&ValidationError::NonNumeric)
            );

            controller.set_field(FieldKey::Phone, text("123")).unwrap();
            assert!(controller.errors().get(FieldKey::Phone).is_none());
        }

        #[test]
        fn test_eager_mode_leaves_untouched_fields_quiet() {
            let mut controller = FormController::default();
            controller.set_field(FieldKey::Name, text("An")).unwrap();
            assert!(controller.errors().is_empty());
        }

        #[test]
        fn test_lazy_mode_keeps_errors_stale() {
            let mut controller = FormController::new(FormOptions {
                validation_mode: ValidationMode::OnSubmit,
                ..Default::default()
            });
            controller.set_field(FieldKey::Phone, text("12a")).unwrap();
            assert!(controller.errors().is_empty());
        }

        #[test]
        fn test_type_mismatch_is_rejected() {
            let mut controller = FormController::default();
            let err = controller
                .set_field(FieldKey::Name, FieldValue::Date(None))
                .unwrap_err();
            assert!(matches!(err, FormError::TypeMismatch { .. }));
            assert!(controller.state().is_empty());
        }

        #[test]
        fn test_binding_exposes_value_and_error() {
            let mut controller = FormController::default();
            controller.set_field(FieldKey::Name, text("A")).unwrap();
            let binding = controller.binding(FieldKey::Name);
            assert_eq!(binding.value, text("A"));
            assert_eq!(binding.label, "Họ và tên");
            assert_eq!(
                binding.error_message().as_deref(),
                Some("Name must have at least 2 characters")
            );
            assert_eq!(controller.bindings().len(), 6);
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_is_pure() {
            let mut controller = FormController::default();
            controller.set_field(FieldKey::Name, text("A1")).unwrap();
            let before = controller.state().clone();
            let first = controller.validate();
            let second = controller.validate();
            assert_eq!(first, second);
            assert_eq!(controller.state(), &before);
            assert_eq!(controller.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_scenario_a_short_name() {
            let mut controller = FormController::default();
            fill(&mut controller, "A", "12345");
            let errors = controller.validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldKey::Name),
                Some(&ValidationError::TooShort { min: 2 })
            );
        }

        #[test]
        fn test_scenario_b_valid_form() {
            let mut controller = FormController::default();
            fill(&mut controller, "Nguyễn Văn A", "0912345678");
            assert!(controller.validate().is_empty());
        }

        #[test]
        fn test_scenario_c_non_numeric_phone() {
            let mut controller = FormController::default();
            fill(&mut controller, "Nguyễn Văn A", "12a45");
            let errors = controller.validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldKey::Phone), Some(&ValidationError::NonNumeric));
        }

        #[test]
        fn test_scenario_d_missing_date_of_birth() {
            let mut controller = FormController::default();
            fill(&mut controller, "Nguyễn Văn A", "0912345678");
            controller
                .set_field(FieldKey::DateOfBirth, FieldValue::Date(None))
                .unwrap();
            let errors = controller.validate();
            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                vec![(FieldKey::DateOfBirth, ValidationError::Required)]
            );
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_never_reaches_sink() {
            let mut controller = FormController::default();
            fill(&mut controller, "A", "12345");
            let before = controller.state().clone();

            let err = controller.submit(&sink_never_called()).await.unwrap_err();

            assert!(matches!(err, SubmitError::Invalid(ref e) if e.len() == 1));
            assert_eq!(controller.state(), &before);
            assert_eq!(controller.phase(), FormPhase::Editing);
        }

        #[tokio::test]
        async fn test_invalid_submit_reveals_all_errors() {
            let mut controller = FormController::default();
            let _ = controller.submit(&sink_never_called()).await;
            assert_eq!(controller.errors().len(), 6);
        }

        #[tokio::test]
        async fn test_valid_form_emits_exact_record_once() {
            let mut controller = FormController::default();
            fill(&mut controller, "Nguyễn Văn A", "0912345678");

            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .withf(|submission| {
                    submission.record.name == "Nguyễn Văn A"
                        && submission.record.phone == "0912345678"
                        && submission.record.date_of_birth
                            == NaiveDate::from_ymd_opt(1999, 3, 15).unwrap()
                        && submission.record.health_check_status == HealthCheckStatus::Checked
                        && submission.record.has_driving_license == DrivingLicense::Yes
                        && submission.record.test_date_confirmation
                            == TestDateConfirmation::Confirm
                })
                .times(1)
                .returning(|_| Ok(()));

            let record = controller.submit(&sink).await.unwrap();

            assert_eq!(record.name, "Nguyễn Văn A");
            assert_eq!(controller.phase(), FormPhase::Submitted);
            assert!(controller.errors().is_empty());
        }

        #[tokio::test]
        async fn test_submitted_form_keeps_values_and_locks() {
            let mut controller = FormController::default();
            fill(&mut controller, "Nguyễn Văn A", "0912345678");
            controller.submit(&sink_called_once()).await.unwrap();

            assert_eq!(controller.state().name, "Nguyễn Văn A");
            assert_eq!(
                controller.set_field(FieldKey::Name, text("Other")),
                Err(FormError::AlreadySubmitted)
            );
            let err = controller.submit(&sink_never_called()).await.unwrap_err();
            assert!(matches!(err, SubmitError::AlreadySubmitted));
        }

        #[tokio::test]
        async fn test_reset_on_submit_returns_to_empty_editing() {
            let mut controller = FormController::new(FormOptions {
                reset_on_submit: true,
                ..Default::default()
            });
            fill(&mut controller, "Nguyễn Văn A", "0912345678");
            controller.submit(&sink_called_once()).await.unwrap();

            assert_eq!(controller.phase(), FormPhase::Editing);
            assert!(controller.state().is_empty());
        }

        #[tokio::test]
        async fn test_sink_failure_reverts_to_editing() {
            let mut controller = FormController::new(FormOptions {
                reset_on_submit: true,
                ..Default::default()
            });
            fill(&mut controller, "Nguyễn Văn A", "0912345678");
            let before = controller.state().clone();

            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow!("network unreachable")));

            let err = controller.submit(&sink).await.unwrap_err();

            assert!(matches!(err, SubmitError::Sink(_)));
            assert!(err.to_string().contains("network unreachable"));
            assert_eq!(controller.phase(), FormPhase::Editing);
            assert_eq!(controller.state(), &before);
        }

        #[tokio::test]
        async fn test_lazy_mode_refreshes_errors_on_submit() {
            let mut controller = FormController::new(FormOptions {
                validation_mode: ValidationMode::OnSubmit,
                ..Default::default()
            });
            fill(&mut controller, "Nguyễn Văn A", "12a45");
            assert!(controller.errors().is_empty());

            let _ = controller.submit(&sink_never_called()).await;
            assert_eq!(
                controller.errors().get(FieldKey::Phone),
                Some(&ValidationError::NonNumeric)
            );
        }
    }

    mod clear {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clear_resets_everything() {
            let mut controller = FormController::default();
            fill(&mut controller, "A", "12a");
            assert!(!controller.errors().is_empty());

            controller.clear();

            assert!(controller.state().is_empty());
            assert!(controller.errors().is_empty());
            assert_eq!(controller.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_clear_after_submit_unlocks() {
            let mut controller = FormController::default();
            fill(&mut controller, "Nguyễn Văn A", "0912345678");
            tokio_test::block_on(controller.submit(&sink_called_once())).unwrap();
            assert!(controller.is_submitted());

            controller.clear();

            assert!(!controller.is_submitted());
            assert!(controller.set_field(FieldKey::Name, text("Lan")).is_ok());
        }

        #[test]
        fn test_clear_is_idempotent() {
            let mut once = FormController::default();
            fill(&mut once, "A", "1");
            once.clear();

            let mut twice = once.clone();
            twice.clear();

            assert_eq!(once.state(), twice.state());
            assert_eq!(once.errors(), twice.errors());
            assert_eq!(once.phase(), twice.phase());
        }
    }
}
