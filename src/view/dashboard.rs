use crate::client::{HrmsApi, Page};
use crate::model::attendance::DATE_FORMAT;
use crate::model::{AttendanceRecord, Employee};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

/// Attendance records pulled for the overview.
pub const ATTENDANCE_WINDOW: Page = Page::new(0, 1000);
pub const RECENT_RECORDS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_attendance: usize,
    pub present_today: usize,
    /// Whole percent of all fetched records marked present.
    pub average_attendance: u32,
    /// First records in the order the backend returned them.
    pub recent: Vec<AttendanceRecord>,
}

impl DashboardStats {
    pub fn compute(employees: &[Employee], records: &[AttendanceRecord], today: NaiveDate) -> Self {
        let today = today.format(DATE_FORMAT).to_string();

        let present_today = records
            .iter()
            .filter(|r| r.is_present() && r.date == today)
            .count();
        let present = records.iter().filter(|r| r.is_present()).count();

        Self {
            total_employees: employees.len(),
            total_attendance: records.len(),
            present_today,
            average_attendance: average_percent(present, records.len()),
            recent: records.iter().take(RECENT_RECORDS).cloned().collect(),
        }
    }
}

fn average_percent(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (present as f64 / total as f64 * 100.0).round() as u32
}

/// Read-only overview. Failures are logged and leave the last stats in place.
pub struct DashboardView<A> {
    api: A,
    loading: bool,
    stats: DashboardStats,
}

impl<A: HrmsApi> DashboardView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            loading: false,
            stats: DashboardStats::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub async fn load(&mut self) -> &DashboardStats {
        self.load_at(Local::now().date_naive()).await
    }

    pub async fn load_at(&mut self, today: NaiveDate) -> &DashboardStats {
        self.loading = true;

        let (employees, records) = futures::join!(
            self.api.list_employees(Page::default()),
            self.api.list_attendance(ATTENDANCE_WINDOW),
        );

        match (employees, records) {
            (Ok(employees), Ok(records)) => {
                self.stats = DashboardStats::compute(&employees, &records, today);
                debug!(
                    employees = self.stats.total_employees,
                    records = self.stats.total_attendance,
                    "Dashboard stats refreshed"
                );
            }
            (Err(e), _) | (_, Err(e)) => {
                error!(error = %e, "Failed to fetch stats");
            }
        }

        self.loading = false;
        &self.stats
    }
}
