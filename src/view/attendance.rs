use super::form::{AttendanceForm, FieldErrors};
use super::notification::{Notification, Notifications};
use super::{Confirm, DeleteOutcome, LoadStatus, SubmitOutcome};
use crate::client::{ApiResult, DateRange, HrmsApi, Page};
use crate::model::{AttendanceRecord, AttendanceSummary, Employee};
use serde::Serialize;
use tracing::{debug, error, info};
use utoipa::ToSchema;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this record?";

/// Serializable snapshot of the attendance page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendancePage {
    pub status: LoadStatus,
    pub employees: Vec<Employee>,
    pub error: Option<String>,
    pub selected_employee_id: Option<String>,
    pub range: DateRange,
    pub records: Vec<AttendanceRecord>,
    pub summary: Option<AttendanceSummary>,
    pub form_open: bool,
    pub form: AttendanceForm,
    #[schema(value_type = Object)]
    pub form_errors: FieldErrors,
    pub notifications: Vec<Notification>,
}

/// Identifies one selection change. Results fetched for an older ticket
/// are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    token: u64,
    employee_id: String,
    range: DateRange,
}

/// Both per-employee fetches for one ticket. Either may have failed.
#[derive(Debug)]
pub struct SelectionData {
    pub records: ApiResult<Vec<AttendanceRecord>>,
    pub summary: ApiResult<AttendanceSummary>,
}

/// Fetches records and summary for `ticket` concurrently.
///
/// Does not touch the view, so callers can run it without holding
/// whatever guards the controller.
pub async fn fetch_selection<A: HrmsApi + ?Sized>(api: &A, ticket: &SelectionTicket) -> SelectionData {
    let (records, summary) = futures::join!(
        api.list_employee_attendance(&ticket.employee_id, Page::default(), ticket.range),
        api.attendance_summary(&ticket.employee_id),
    );
    SelectionData { records, summary }
}

/// Employee dropdown, per-employee records and summary, mark and delete flows.
pub struct AttendanceView<A> {
    api: A,
    status: LoadStatus,
    employees: Vec<Employee>,
    error: Option<String>,
    selected: Option<String>,
    range: DateRange,
    token: u64,
    records: Vec<AttendanceRecord>,
    summary: Option<AttendanceSummary>,
    form_open: bool,
    form: AttendanceForm,
    form_errors: FieldErrors,
    notifications: Notifications,
}

impl<A: HrmsApi> AttendanceView<A> {
    pub fn new(api: A) -> Self {
        Self::with_notifications(api, Notifications::default())
    }

    pub fn with_notifications(api: A, notifications: Notifications) -> Self {
        Self {
            api,
            status: LoadStatus::Idle,
            employees: Vec::new(),
            error: None,
            selected: None,
            range: DateRange::default(),
            token: 0,
            records: Vec::new(),
            summary: None,
            form_open: false,
            form: AttendanceForm::default(),
            form_errors: FieldErrors::new(),
            notifications,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn summary(&self) -> Option<&AttendanceSummary> {
        self.summary.as_ref()
    }

    pub fn form(&self) -> &AttendanceForm {
        &self.form
    }

    pub fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn notifications(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Fetches the employee list for the dropdown and the mark form.
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;

        match self.api.list_employees(Page::default()).await {
            Ok(employees) => {
                self.employees = employees;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch employees for attendance");
                let message = e.message_or("Failed to fetch data");
                self.notifications.error(message.clone());
                self.error = Some(message);
                self.status = LoadStatus::Error;
            }
        }
    }

    /// Records a selection change and returns the ticket to fetch for.
    /// An empty id clears the selection and returns `None`.
    pub fn begin_selection(&mut self, employee_id: &str) -> Option<SelectionTicket> {
        self.token += 1;

        if employee_id.is_empty() {
            self.selected = None;
            self.records.clear();
            self.summary = None;
            return None;
        }

        self.selected = Some(employee_id.to_string());
        Some(SelectionTicket {
            token: self.token,
            employee_id: employee_id.to_string(),
            range: self.range,
        })
    }

    /// Ticket for re-fetching the current selection, if any.
    pub fn refresh_ticket(&mut self) -> Option<SelectionTicket> {
        let selected = self.selected.clone()?;
        self.begin_selection(&selected)
    }

    /// Applies fetched data unless a newer selection was made meanwhile.
    /// Each failed fetch silently resets only its own slice.
    pub fn apply_selection(&mut self, ticket: &SelectionTicket, data: SelectionData) -> bool {
        if ticket.token != self.token {
            debug!(
                employee_id = %ticket.employee_id,
                stale = ticket.token,
                current = self.token,
                "Discarding stale selection result"
            );
            return false;
        }

        self.records = data.records.unwrap_or_else(|e| {
            debug!(error = %e, employee_id = %ticket.employee_id, "Attendance records unavailable");
            Vec::new()
        });
        self.summary = data.summary.map_or_else(
            |e| {
                debug!(error = %e, employee_id = %ticket.employee_id, "Attendance summary unavailable");
                None
            },
            Some,
        );
        true
    }

    pub async fn select(&mut self, employee_id: &str) {
        if let Some(ticket) = self.begin_selection(employee_id) {
            let data = fetch_selection(&self.api, &ticket).await;
            self.apply_selection(&ticket, data);
        }
    }

    /// Date filter used by the next selection fetch.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    /// Stores the range and re-fetches the selection. The range filters
    /// only the records; the summary always covers every record.
    pub async fn change_range(&mut self, range: DateRange) {
        self.range = range;
        self.refresh_selected().await;
    }

    /// Re-fetches records and summary for the selected employee, if any.
    pub async fn refresh_selected(&mut self) {
        if let Some(ticket) = self.refresh_ticket() {
            let data = fetch_selection(&self.api, &ticket).await;
            self.apply_selection(&ticket, data);
        }
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.form = AttendanceForm::default();
        self.form_errors.clear();
    }

    pub fn set_form(&mut self, form: AttendanceForm) {
        self.form = form;
    }

    pub async fn submit_mark(&mut self) -> SubmitOutcome {
        let errors = self.form.validate();
        let request = match self.form.to_request() {
            Some(request) if errors.is_empty() => request,
            _ => {
                debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Attendance form rejected");
                self.form_errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        match self.api.mark_attendance(&request).await {
            Ok(record) => {
                info!(employee_id = %record.employee_id, date = %record.date, status = %record.status, "Attendance marked");
                self.notifications.success("Attendance marked successfully!");
                self.close_form();
                self.refresh_selected().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                error!(error = %e, employee_id = %request.employee_id, "Failed to mark attendance");
                self.notifications
                    .error(e.message_or("Failed to mark attendance"));
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn delete_record(&mut self, record_id: &str, confirm: &impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_attendance_record(record_id).await {
            Ok(()) => {
                info!(record_id, "Attendance record deleted");
                self.notifications.success("Record deleted successfully!");
                self.refresh_selected().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!(error = %e, record_id, "Failed to delete attendance record");
                self.notifications.error(e.message_or("Failed to delete record"));
                DeleteOutcome::Failed
            }
        }
    }

    pub fn page(&mut self) -> AttendancePage {
        AttendancePage {
            status: self.status,
            employees: self.employees.clone(),
            error: self.error.clone(),
            selected_employee_id: self.selected.clone(),
            range: self.range,
            records: self.records.clone(),
            summary: self.summary.clone(),
            form_open: self.form_open,
            form: self.form.clone(),
            form_errors: self.form_errors.clone(),
            notifications: self.notifications.active(),
        }
    }
}
