//! Form field keys and value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one field of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Phone,
    DateOfBirth,
    HealthCheckStatus,
    HasDrivingLicense,
    TestDateConfirmation,
}

impl FieldKey {
    /// All fields in display order
    pub const ALL: [FieldKey; 6] = [
        FieldKey::Name,
        FieldKey::Phone,
        FieldKey::DateOfBirth,
        FieldKey::HealthCheckStatus,
        FieldKey::HasDrivingLicense,
        FieldKey::TestDateConfirmation,
    ];

    /// Stable name used in submitted records and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
            Self::HealthCheckStatus => "healthCheckStatus",
            Self::HasDrivingLicense => "hasDrivingLicense",
            Self::TestDateConfirmation => "testDateConfirmation",
        }
    }

    /// Display label shown next to the control
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Họ và tên",
            Self::Phone => "Số điện thoại",
            Self::DateOfBirth => "Ngày sinh",
            Self::HealthCheckStatus => "Bạn đã khám sức khỏe chưa?",
            Self::HasDrivingLicense => "Bạn có bằng ô tô không?",
            Self::TestDateConfirmation => "Xác nhận đăng ký lịch thi 17/10",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Nhập họ và tên"),
            Self::Phone => Some("Nhập số điện thoại"),
            Self::DateOfBirth => Some("Chọn ngày sinh"),
            _ => None,
        }
    }

    /// Kind of value this field accepts
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::Phone => FieldKind::Text,
            Self::DateOfBirth => FieldKind::Date,
            Self::HealthCheckStatus => FieldKind::HealthCheck,
            Self::HasDrivingLicense => FieldKind::DrivingLicense,
            Self::TestDateConfirmation => FieldKind::TestDate,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Primitive type of a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    HealthCheck,
    DrivingLicense,
    TestDate,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::HealthCheck => "health check choice",
            Self::DrivingLicense => "driving license choice",
            Self::TestDate => "test date confirmation",
        };
        f.write_str(name)
    }
}

/// A single-select option set rendered as a radio group
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Options in display order
    const OPTIONS: &'static [Self];

    /// Display label of the option
    fn label(&self) -> &'static str;

    /// Cycle forward: unset selects the first option, the last wraps to the first
    fn cycle_next(current: Option<Self>) -> Option<Self> {
        let options = Self::OPTIONS;
        match current.and_then(|c| options.iter().position(|o| *o == c)) {
            Some(idx) => options.get((idx + 1) % options.len()).copied(),
            None => options.first().copied(),
        }
    }

    /// Cycle backward: unset selects the last option, the first wraps to the last
    fn cycle_prev(current: Option<Self>) -> Option<Self> {
        let options = Self::OPTIONS;
        match current.and_then(|c| options.iter().position(|o| *o == c)) {
            Some(0) | None => options.last().copied(),
            Some(idx) => options.get(idx - 1).copied(),
        }
    }
}

/// Whether the applicant has had the health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthCheckStatus {
    Checked,
    NotChecked,
}

impl Choice for HealthCheckStatus {
    const OPTIONS: &'static [Self] = &[Self::Checked, Self::NotChecked];

    fn label(&self) -> &'static str {
        match self {
            Self::Checked => "Đã khám",
            Self::NotChecked => "Chưa khám",
        }
    }
}

/// Whether the applicant holds a car driving license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrivingLicense {
    Yes,
    No,
}

impl Choice for DrivingLicense {
    const OPTIONS: &'static [Self] = &[Self::Yes, Self::No];

    fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Có",
            Self::No => "Không",
        }
    }
}

/// Acknowledgement of the scheduled test date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestDateConfirmation {
    Confirm,
}

impl Choice for TestDateConfirmation {
    const OPTIONS: &'static [Self] = &[Self::Confirm];

    fn label(&self) -> &'static str {
        "Xác nhận"
    }

    /// A single option behaves like a checkbox: toggles between set and unset
    fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            Some(_) => None,
            None => Some(Self::Confirm),
        }
    }

    fn cycle_prev(current: Option<Self>) -> Option<Self> {
        Self::cycle_next(current)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(Option<NaiveDate>),
    HealthCheck(Option<HealthCheckStatus>),
    DrivingLicense(Option<DrivingLicense>),
    TestDate(Option<TestDateConfirmation>),
}

impl FieldValue {
    /// Kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Date(_) => FieldKind::Date,
            Self::HealthCheck(_) => FieldKind::HealthCheck,
            Self::DrivingLicense(_) => FieldKind::DrivingLicense,
            Self::TestDate(_) => FieldKind::TestDate,
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            _ => "",
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.map(format_date).unwrap_or_default(),
            Self::HealthCheck(c) => c.map(|c| c.label().to_string()).unwrap_or_default(),
            Self::DrivingLicense(c) => c.map(|c| c.label().to_string()).unwrap_or_default(),
            Self::TestDate(c) => c.map(|c| c.label().to_string()).unwrap_or_default(),
        }
    }
}

/// Display format for dates (DD/MM/YYYY)
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Format a date the way the form displays it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_in_display_order() {
        assert_eq!(FieldKey::ALL[0], FieldKey::Name);
        assert_eq!(FieldKey::ALL[5], FieldKey::TestDateConfirmation);
        assert!(FieldKey::Name < FieldKey::TestDateConfirmation);
    }

    #[test]
    fn test_field_key_names() {
        let names: Vec<_> = FieldKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "phone",
                "dateOfBirth",
                "healthCheckStatus",
                "hasDrivingLicense",
                "testDateConfirmation"
            ]
        );
    }

    #[test]
    fn test_field_kind_matches_value_kind() {
        assert_eq!(FieldKey::Phone.kind(), FieldValue::Text(String::new()).kind());
        assert_eq!(FieldKey::DateOfBirth.kind(), FieldValue::Date(None).kind());
        assert_ne!(FieldKey::HasDrivingLicense.kind(), FieldValue::TestDate(None).kind());
    }

    #[test]
    fn test_choice_cycle_next_from_unset_selects_first() {
        assert_eq!(
            HealthCheckStatus::cycle_next(None),
            Some(HealthCheckStatus::Checked)
        );
        assert_eq!(DrivingLicense::cycle_next(None), Some(DrivingLicense::Yes));
    }

    #[test]
    fn test_choice_cycle_next_wraps() {
        assert_eq!(
            DrivingLicense::cycle_next(Some(DrivingLicense::No)),
            Some(DrivingLicense::Yes)
        );
    }

    #[test]
    fn test_choice_cycle_prev_from_unset_selects_last() {
        assert_eq!(
            HealthCheckStatus::cycle_prev(None),
            Some(HealthCheckStatus::NotChecked)
        );
        assert_eq!(
            HealthCheckStatus::cycle_prev(Some(HealthCheckStatus::NotChecked)),
            Some(HealthCheckStatus::Checked)
        );
    }

    #[test]
    fn test_confirmation_toggles_like_checkbox() {
        let set = TestDateConfirmation::cycle_next(None);
        assert_eq!(set, Some(TestDateConfirmation::Confirm));
        assert_eq!(TestDateConfirmation::cycle_next(set), None);
        assert_eq!(TestDateConfirmation::cycle_prev(None), set);
    }

    #[test]
    fn test_choice_tags_serialize_as_wire_names() {
        assert_eq!(
            serde_json::to_string(&HealthCheckStatus::NotChecked).unwrap(),
            "\"notChecked\""
        );
        assert_eq!(serde_json::to_string(&DrivingLicense::Yes).unwrap(), "\"yes\"");
        assert_eq!(
            serde_json::to_string(&TestDateConfirmation::Confirm).unwrap(),
            "\"confirm\""
        );
    }

    #[test]
    fn test_display_value_formats_date() {
        let date = NaiveDate::from_ymd_opt(1999, 3, 15).unwrap();
        assert_eq!(FieldValue::Date(Some(date)).display_value(), "15/03/1999");
        assert_eq!(FieldValue::Date(None).display_value(), "");
    }

    #[test]
    fn test_display_value_uses_option_labels() {
        assert_eq!(
            FieldValue::HealthCheck(Some(HealthCheckStatus::NotChecked)).display_value(),
            "Chưa khám"
        );
        assert_eq!(FieldValue::TestDate(None).display_value(), "");
    }
}
