//! Registration form state and its submitted snapshot

use super::field::{
    DrivingLicense, FieldKey, FieldValue, HealthCheckStatus, TestDateConfirmation,
};
use super::validation::{
    validate_name, validate_phone, validate_required, ValidationError, ValidationErrors,
};
use crate::state::FormError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current values of every registration field
///
/// `Default` is the initial empty state: blank text, nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub health_check_status: Option<HealthCheckStatus>,
    pub has_driving_license: Option<DrivingLicense>,
    pub test_date_confirmation: Option<TestDateConfirmation>,
}

impl FormState {
    /// Whether every field is at its initial value
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Read one field as a typed value
    pub fn value(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::Name => FieldValue::Text(self.name.clone()),
            FieldKey::Phone => FieldValue::Text(self.phone.clone()),
            FieldKey::DateOfBirth => FieldValue::Date(self.date_of_birth),
            FieldKey::HealthCheckStatus => FieldValue::HealthCheck(self.health_check_status),
            FieldKey::HasDrivingLicense => FieldValue::DrivingLicense(self.has_driving_license),
            FieldKey::TestDateConfirmation => FieldValue::TestDate(self.test_date_confirmation),
        }
    }

    /// Store one field, rejecting a value of the wrong type
    pub fn apply(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        match (key, value) {
            (FieldKey::Name, FieldValue::Text(s)) => self.name = s,
            (FieldKey::Phone, FieldValue::Text(s)) => self.phone = s,
            (FieldKey::DateOfBirth, FieldValue::Date(d)) => self.date_of_birth = d,
            (FieldKey::HealthCheckStatus, FieldValue::HealthCheck(c)) => {
                self.health_check_status = c
            }
            (FieldKey::HasDrivingLicense, FieldValue::DrivingLicense(c)) => {
                self.has_driving_license = c
            }
            (FieldKey::TestDateConfirmation, FieldValue::TestDate(c)) => {
                self.test_date_confirmation = c
            }
            (key, value) => {
                return Err(FormError::TypeMismatch {
                    field: key,
                    expected: key.kind(),
                    actual: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Run the rule for a single field
    pub fn validate_field(&self, key: FieldKey) -> Option<ValidationError> {
        match key {
            FieldKey::Name => validate_name(&self.name),
            FieldKey::Phone => validate_phone(&self.phone),
            FieldKey::DateOfBirth => validate_required(&self.date_of_birth),
            FieldKey::HealthCheckStatus => validate_required(&self.health_check_status),
            FieldKey::HasDrivingLicense => validate_required(&self.has_driving_license),
            FieldKey::TestDateConfirmation => validate_required(&self.test_date_confirmation),
        }
    }

    /// Run every rule and collect the failures
    pub fn validate(&self) -> ValidationErrors {
        FieldKey::ALL
            .iter()
            .filter_map(|key| self.validate_field(*key).map(|e| (*key, e)))
            .collect()
    }

    /// Snapshot the values as a record, or the error set if any rule fails
    pub fn to_record(&self) -> Result<FormRecord, ValidationErrors> {
        let errors = self.validate();
        match (
            self.date_of_birth,
            self.health_check_status,
            self.has_driving_license,
            self.test_date_confirmation,
        ) {
            (Some(date_of_birth), Some(health), Some(license), Some(confirm))
                if errors.is_empty() =>
            {
                Ok(FormRecord {
                    name: self.name.clone(),
                    phone: self.phone.clone(),
                    date_of_birth,
                    health_check_status: health,
                    has_driving_license: license,
                    test_date_confirmation: confirm,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Immutable snapshot of a fully validated form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub health_check_status: HealthCheckStatus,
    pub has_driving_license: DrivingLicense,
    pub test_date_confirmation: TestDateConfirmation,
}

/// A record as handed to a submission sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: FormRecord,
}

impl Submission {
    pub fn new(record: FormRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }
}
