//! Create-forms and their synchronous validation.
//!
//! Validation never touches the network. Each field reports at most one
//! message: the first rule it fails.

use crate::model::attendance::DATE_FORMAT;
use crate::model::{AttendanceStatus, NewAttendance, NewEmployee};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Field name → message.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EmployeeForm {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl EmployeeForm {
    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmployeeField::EmployeeId => self.employee_id = value,
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if is_blank(&self.employee_id) {
            add(&mut errors, EmployeeField::EmployeeId, "Employee ID is required");
        }
        if is_blank(&self.full_name) {
            add(&mut errors, EmployeeField::FullName, "Full name is required");
        }
        // A blank email reports only that it is required, never that it is malformed
        if is_blank(&self.email) {
            add(&mut errors, EmployeeField::Email, "Email is required");
        } else if !self.email.contains('@') {
            add(&mut errors, EmployeeField::Email, "Email must be valid");
        }
        if is_blank(&self.department) {
            add(&mut errors, EmployeeField::Department, "Department is required");
        }

        errors
    }

    /// Request body for a form that passed validation. Values are sent as typed.
    pub fn to_request(&self) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceField {
    EmployeeId,
    Date,
    Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AttendanceForm {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    /// `yyyy-MM-dd`
    #[schema(example = "2026-01-15")]
    pub date: String,
    pub status: Option<AttendanceStatus>,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            date: String::new(),
            status: Some(AttendanceStatus::Present),
        }
    }
}

impl AttendanceForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.employee_id.is_empty() {
            add(&mut errors, AttendanceField::EmployeeId, "Employee is required");
        }
        if self.date.is_empty() {
            add(&mut errors, AttendanceField::Date, "Date is required");
        } else if parse_date(&self.date).is_none() {
            add(
                &mut errors,
                AttendanceField::Date,
                "Date must be in YYYY-MM-DD format",
            );
        }
        if self.status.is_none() {
            add(&mut errors, AttendanceField::Status, "Status is required");
        }

        errors
    }

    /// `None` unless the form validates.
    pub fn to_request(&self) -> Option<NewAttendance> {
        if self.employee_id.is_empty() {
            return None;
        }
        Some(NewAttendance {
            employee_id: self.employee_id.clone(),
            date: parse_date(&self.date)?,
            status: self.status?,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn add(errors: &mut FieldErrors, field: impl AsRef<str>, message: &str) {
    errors
        .entry(field.as_ref().to_string())
        .or_insert_with(|| message.to_string());
}
