use crate::api::attendance::SelectionRequest;
use crate::client::DateRange;
use crate::model::{AttendanceRecord, AttendanceStatus, AttendanceSummary, Employee};
use crate::view::form::{AttendanceForm, EmployeeForm};
use crate::view::{
    AttendancePage, DashboardStats, DeleteOutcome, EmployeePage, LoadStatus, Notification,
    NotificationLevel, SubmitOutcome,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite Console",
        version = "0.1.0",
        description = r#"
## HRMS Lite operator console

View models for the three HRMS Lite pages, driven against the HRMS Lite
backend configured by `API_URL`.

### Pages
- **Employees**: list, add-employee form, confirmed delete
- **Attendance**: employee selection with records and summary, mark-attendance form, confirmed delete
- **Dashboard**: headcount, attendance totals, present today, average attendance, recent records

### Behaviour
- Every read re-fetches from the backend; nothing is cached.
- After a create or delete the affected list is re-fetched, never patched locally.
- Form validation happens here; invalid forms never reach the backend.
- Backend failures show up as notifications carrying the backend's `detail`
  or a fallback message.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::load,
        crate::api::employee::open_form,
        crate::api::employee::close_form,
        crate::api::employee::submit,
        crate::api::employee::delete,
        crate::api::employee::dismiss,

        crate::api::attendance::load,
        crate::api::attendance::select,
        crate::api::attendance::open_form,
        crate::api::attendance::close_form,
        crate::api::attendance::mark,
        crate::api::attendance::delete_record,
        crate::api::attendance::dismiss,

        crate::api::dashboard::load
    ),
    components(
        schemas(
            Employee,
            AttendanceRecord,
            AttendanceStatus,
            AttendanceSummary,
            DateRange,
            EmployeeForm,
            AttendanceForm,
            EmployeePage,
            AttendancePage,
            DashboardStats,
            LoadStatus,
            Notification,
            NotificationLevel,
            SubmitOutcome,
            DeleteOutcome,
            SelectionRequest
        )
    ),
    tags(
        (name = "Health", description = "Console and backend health"),
        (name = "Employees", description = "Employee page"),
        (name = "Attendance", description = "Attendance page"),
        (name = "Dashboard", description = "Dashboard page"),
    )
)]
pub struct ApiDoc;
