//! Per-page view controllers.
//!
//! Each controller owns its state outright; nothing is shared between
//! pages except the backend. After any create or delete the owning
//! controller re-fetches from the backend instead of patching its copy.

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod form;
pub mod notification;

pub use attendance::{AttendancePage, AttendanceView, SelectionTicket};
pub use dashboard::{DashboardStats, DashboardView};
pub use employees::{EmployeePage, EmployeeView};
pub use form::{AttendanceForm, EmployeeForm, FieldErrors};
pub use notification::{Notification, NotificationLevel, Notifications};

use serde::Serialize;
use utoipa::ToSchema;

/// Lifecycle of a page's primary fetch. Re-entered on every fetch.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Blocking yes/no prompt required before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a form submission.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Created,
    /// The backend rejected the request.
    Failed,
}

/// Result of a confirmed delete.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}
