pub mod attendance;
pub mod dashboard;
pub mod employee;
pub mod health;

use crate::client::ApiClient;
use crate::view::{AttendanceView, DashboardView, EmployeeView, Notifications};
use chrono::Duration;
use futures::lock::Mutex;
use serde::Deserialize;
use utoipa::IntoParams;

/// One controller per page, shared by all workers.
pub struct Console {
    pub api: ApiClient,
    pub employees: Mutex<EmployeeView<ApiClient>>,
    pub attendance: Mutex<AttendanceView<ApiClient>>,
    pub dashboard: Mutex<DashboardView<ApiClient>>,
}

impl Console {
    pub fn new(api: ApiClient, notification_ttl: Duration) -> Self {
        Self {
            employees: Mutex::new(EmployeeView::with_notifications(
                api.clone(),
                Notifications::new(notification_ttl),
            )),
            attendance: Mutex::new(AttendanceView::with_notifications(
                api.clone(),
                Notifications::new(notification_ttl),
            )),
            dashboard: Mutex::new(DashboardView::new(api.clone())),
            api,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfirmQuery {
    /// Answer to the "are you sure" prompt. Anything but `true` cancels.
    #[serde(default)]
    pub confirm: bool,
}
