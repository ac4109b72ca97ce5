use super::form::{EmployeeField, EmployeeForm, FieldErrors};
use super::notification::{Notification, Notifications};
use super::{Confirm, DeleteOutcome, LoadStatus, SubmitOutcome};
use crate::client::{HrmsApi, Page};
use crate::model::Employee;
use serde::Serialize;
use tracing::{debug, error, info};
use utoipa::ToSchema;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Serializable snapshot of the employee page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeePage {
    pub status: LoadStatus,
    pub employees: Vec<Employee>,
    pub error: Option<String>,
    pub form_open: bool,
    pub form: EmployeeForm,
    #[schema(value_type = Object)]
    pub form_errors: FieldErrors,
    pub notifications: Vec<Notification>,
}

/// Employee list, add-employee form and delete flow.
pub struct EmployeeView<A> {
    api: A,
    status: LoadStatus,
    employees: Vec<Employee>,
    error: Option<String>,
    form_open: bool,
    form: EmployeeForm,
    form_errors: FieldErrors,
    notifications: Notifications,
}

impl<A: HrmsApi> EmployeeView<A> {
    pub fn new(api: A) -> Self {
        Self::with_notifications(api, Notifications::default())
    }

    pub fn with_notifications(api: A, notifications: Notifications) -> Self {
        Self {
            api,
            status: LoadStatus::Idle,
            employees: Vec::new(),
            error: None,
            form_open: false,
            form: EmployeeForm::default(),
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

    pub fn form(&self) -> &EmployeeForm {
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

    /// Fetches the full list. On failure the previous list stays visible.
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;

        match self.api.list_employees(Page::default()).await {
            Ok(employees) => {
                debug!(count = employees.len(), "Employees loaded");
                self.employees = employees;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch employees");
                let message = e.message_or("Failed to fetch employees");
                self.notifications.error(message.clone());
                self.error = Some(message);
                self.status = LoadStatus::Error;
            }
        }
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Closes the form and discards its contents and errors.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.form = EmployeeForm::default();
        self.form_errors.clear();
    }

    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_form(&mut self, form: EmployeeForm) {
        self.form = form;
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let errors = self.form.validate();
        if !errors.is_empty() {
            debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Employee form rejected");
            self.form_errors = errors;
            return SubmitOutcome::Invalid;
        }

        let request = self.form.to_request();
        match self.api.create_employee(&request).await {
            Ok(created) => {
                info!(employee_id = %created.employee_id, "Employee created");
                self.notifications.success("Employee added successfully!");
                self.close_form();
                self.load().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                error!(error = %e, employee_id = %request.employee_id, "Failed to create employee");
                self.notifications.error(e.message_or("Failed to add employee"));
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn delete(&mut self, employee_id: &str, confirm: &impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_employee(employee_id).await {
            Ok(()) => {
                info!(employee_id, "Employee deleted");
                self.notifications.success("Employee deleted successfully!");
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!(error = %e, employee_id, "Failed to delete employee");
                self.notifications
                    .error(e.message_or("Failed to delete employee"));
                DeleteOutcome::Failed
            }
        }
    }

    pub fn page(&mut self) -> EmployeePage {
        EmployeePage {
            status: self.status,
            employees: self.employees.clone(),
            error: self.error.clone(),
            form_open: self.form_open,
            form: self.form.clone(),
            form_errors: self.form_errors.clone(),
            notifications: self.notifications.active(),
        }
    }
}
