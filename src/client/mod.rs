//! REST client for the HR backend.
//!
//! Every operation is a single request with no retry and no response
//! transformation beyond JSON decoding. View controllers talk to the
//! backend through [`HrmsApi`] so they can run against [`ApiClient`] or
//! an in-memory implementation.

pub mod error;
pub mod http;


pub use error::{ApiError, ApiResult};
pub use http::ApiClient;

use crate::model::{
    AttendanceRecord, AttendanceSummary, AttendanceUpdate, Employee, EmployeeUpdate,
    NewAttendance, NewEmployee,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset pagination passed straight through to the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

/// Optional inclusive date filter for per-employee attendance.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-01", format = "date", value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-31", format = "date", value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
}

#[async_trait]
pub trait HrmsApi: Send + Sync {
    async fn list_employees(&self, page: Page) -> ApiResult<Vec<Employee>>;

    async fn get_employee(&self, employee_id: &str) -> ApiResult<Employee>;

    /// The backend rejects duplicate `employee_id`s and emails.
    async fn create_employee(&self, employee: &NewEmployee) -> ApiResult<Employee>;

    async fn update_employee(&self, employee_id: &str, update: &EmployeeUpdate)
    -> ApiResult<Employee>;

    /// Not idempotent: deleting an unknown id fails.
    async fn delete_employee(&self, employee_id: &str) -> ApiResult<()>;

    async fn mark_attendance(&self, attendance: &NewAttendance) -> ApiResult<AttendanceRecord>;

    async fn list_attendance(&self, page: Page) -> ApiResult<Vec<AttendanceRecord>>;

    async fn list_employee_attendance(
        &self,
        employee_id: &str,
        page: Page,
        range: DateRange,
    ) -> ApiResult<Vec<AttendanceRecord>>;

    async fn attendance_summary(&self, employee_id: &str) -> ApiResult<AttendanceSummary>;

    async fn get_attendance_record(&self, record_id: &str) -> ApiResult<AttendanceRecord>;

    async fn update_attendance_record(
        &self,
        record_id: &str,
        update: &AttendanceUpdate,
    ) -> ApiResult<AttendanceRecord>;

    async fn delete_attendance_record(&self, record_id: &str) -> ApiResult<()>;
}
