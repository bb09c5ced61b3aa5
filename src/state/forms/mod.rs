//! Form domain layer
//!
//! Typed field values, validation rules, the form state with its submitted
//! snapshot, and the controller that ties them to a submission sink.

mod controller;
mod field;
mod form_state;
mod validation;

pub use controller::{
    FieldBinding, FormController, FormError, FormOptions, FormPhase, SubmitError, ValidationMode,
};
pub use field::{
    format_date, Choice, DrivingLicense, FieldKey, FieldKind, FieldValue, HealthCheckStatus,
    TestDateConfirmation,
};
pub use form_state::{FormRecord, Submission};
pub use validation::ValidationError;
