use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Wire format of attendance dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Attendance record as returned by the backend. `date` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "_id": "65f1c0a2e4b0a1b2c3d4e5f7",
    "employee_id": "EMP001",
    "date": "2026-01-15",
    "status": "Present",
    "created_at": "2026-01-15T09:00:00"
}))]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2026-01-15", format = "date")]
    pub date: String,

    pub status: AttendanceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AttendanceRecord {
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

/// Body of `POST /attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewAttendance {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "2026-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body of `PUT /attendance/record/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceUpdate {
    pub status: AttendanceStatus,
}

/// Server-computed statistics for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "employee_id": "EMP001",
    "total_records": 4,
    "present_days": 3,
    "absent_days": 1,
    "attendance_percentage": 75.0
}))]
pub struct AttendanceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub total_records: u64,
    pub present_days: u64,
    pub absent_days: u64,
    pub attendance_percentage: f64,
}
