//! reqwest-backed implementation of [`HrmsApi`]

use super::{ApiError, ApiResult, DateRange, HrmsApi, Page};
use crate::model::{
    AttendanceRecord, AttendanceSummary, AttendanceUpdate, Employee, EmployeeUpdate,
    NewAttendance, NewEmployee,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// HTTP client bound to one backend base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> ApiResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins percent-encoded path segments onto the base URL.
    fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ApiResult<RequestBuilder> {
        let url = self.url(segments)?;
        debug!(%method, %url, "Backend request");
        Ok(self.client.request(method, url))
    }

    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.bytes().await?;
        let err = ApiError::from_body(status, &body);
        warn!(%url, %status, detail = ?err.detail(), "Backend request failed");
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn send_empty(request: RequestBuilder) -> ApiResult<()> {
        Self::check(request.send().await?).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        Self::send_json(self.request(Method::GET, segments)?).await
    }

    async fn get_query<T, Q>(&self, segments: &[&str], query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        Self::send_json(self.request(Method::GET, segments)?.query(query)).await
    }

    async fn send_body<T, B>(&self, method: Method, segments: &[&str], body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        Self::send_json(self.request(method, segments)?.json(body)).await
    }

    async fn delete(&self, segments: &[&str]) -> ApiResult<()> {
        Self::send_empty(self.request(Method::DELETE, segments)?).await
    }

    /// `GET /health` on the backend.
    pub async fn health(&self) -> ApiResult<Value> {
        self.get(&["health"]).await
    }
}

#[async_trait]
impl HrmsApi for ApiClient {
    async fn list_employees(&self, page: Page) -> ApiResult<Vec<Employee>> {
        self.get_query(&["employees"], &page).await
    }

    async fn get_employee(&self, employee_id: &str) -> ApiResult<Employee> {
        self.get(&["employees", employee_id]).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> ApiResult<Employee> {
        self.send_body(Method::POST, &["employees"], employee).await
    }

    async fn update_employee(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> ApiResult<Employee> {
        self.send_body(Method::PUT, &["employees", employee_id], update)
            .await
    }

    async fn delete_employee(&self, employee_id: &str) -> ApiResult<()> {
        self.delete(&["employees", employee_id]).await
    }

    async fn mark_attendance(&self, attendance: &NewAttendance) -> ApiResult<AttendanceRecord> {
        self.send_body(Method::POST, &["attendance"], attendance).await
    }

    async fn list_attendance(&self, page: Page) -> ApiResult<Vec<AttendanceRecord>> {
        self.get_query(&["attendance"], &page).await
    }

    async fn list_employee_attendance(
        &self,
        employee_id: &str,
        page: Page,
        range: DateRange,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        #[derive(Serialize)]
        struct Query {
            #[serde(flatten)]
            page: Page,
            #[serde(flatten)]
            range: DateRange,
        }

        self.get_query(
            &["attendance", "employee", employee_id],
            &Query { page, range },
        )
        .await
    }

    async fn attendance_summary(&self, employee_id: &str) -> ApiResult<AttendanceSummary> {
        self.get(&["attendance", "summary", employee_id]).await
    }

    async fn get_attendance_record(&self, record_id: &str) -> ApiResult<AttendanceRecord> {
        self.get(&["attendance", "record", record_id]).await
    }

    async fn update_attendance_record(
        &self,
        record_id: &str,
        update: &AttendanceUpdate,
    ) -> ApiResult<AttendanceRecord> {
        self.send_body(Method::PUT, &["attendance", "record", record_id], update)
            .await
    }

    async fn delete_attendance_record(&self, record_id: &str) -> ApiResult<()> {
        self.delete(&["attendance", "record", record_id]).await
    }
}
