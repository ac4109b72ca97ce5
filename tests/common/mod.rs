//! In-memory stand-in for the HRMS Lite backend, served over real HTTP.
//!
//! Mirrors the backend's routes, status codes and `detail` error bodies
//! closely enough to drive `ApiClient` end to end. Every request is logged
//! as `METHOD /path?query` so tests can assert what actually went out.

#![allow(dead_code)]

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Mutex;

#[derive(Default)]
pub struct Backend {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    employees: Vec<Value>,
    attendance: Vec<Value>,
    requests: Vec<String>,
    next_id: u64,
}

impl State {
    fn object_id(&mut self) -> String {
        self.next_id += 1;
        format!("65f1c0a2e4b0a1b2c3d4{:04x}", self.next_id)
    }

    fn has_employee(&self, employee_id: &str) -> bool {
        self.employees.iter().any(|e| e["employee_id"] == employee_id)
    }
}

impl Backend {
    pub fn new() -> web::Data<Self> {
        web::Data::new(Self::default())
    }

    pub fn seed_employee(&self, employee_id: &str, full_name: &str, department: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.object_id();
        let email = format!("{}@example.com", employee_id.to_lowercase());
        state.employees.push(json!({
            "_id": id,
            "employee_id": employee_id,
            "full_name": full_name,
            "email": email,
            "department": department,
            "created_at": "2026-01-01T09:00:00",
            "updated_at": "2026-01-01T09:00:00"
        }));
    }

    /// Returns the new record's `_id`.
    pub fn seed_record(&self, employee_id: &str, date: &str, status: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.object_id();
        state.attendance.push(json!({
            "_id": id,
            "employee_id": employee_id,
            "date": date,
            "status": status,
            "created_at": format!("{date}T09:00:00")
        }));
        id
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_matching(&self, prefix: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.starts_with(prefix))
            .collect()
    }

    pub fn employee_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .employees
            .iter()
            .filter_map(|e| e["employee_id"].as_str().map(str::to_string))
            .collect()
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().attendance.len()
    }

    fn log(&self, req: &HttpRequest) {
        self.state
            .lock()
            .unwrap()
            .requests
            .push(format!("{} {}", req.method(), req.uri()));
    }
}

/// Serves `backend` on an ephemeral port and returns its base URL.
pub fn spawn(backend: web::Data<Backend>) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .configure(configure)
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind mock backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// Base URL nothing listens on.
pub fn unreachable() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::resource("/employees")
                .route(web::get().to(list_employees))
                .route(web::post().to(create_employee)),
        )
        .service(
            web::resource("/employees/{employee_id}")
                .route(web::get().to(get_employee))
                .route(web::put().to(update_employee))
                .route(web::delete().to(delete_employee)),
        )
        .service(
            web::resource("/attendance")
                .route(web::get().to(list_attendance))
                .route(web::post().to(mark_attendance)),
        )
        .route(
            "/attendance/employee/{employee_id}",
            web::get().to(employee_attendance),
        )
        .route(
            "/attendance/summary/{employee_id}",
            web::get().to(attendance_summary),
        )
        .service(
            web::resource("/attendance/record/{record_id}")
                .route(web::get().to(get_record))
                .route(web::put().to(update_record))
                .route(web::delete().to(delete_record)),
        );
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
    start_date: Option<String>,
    end_date: Option<String>,
}

fn default_limit() -> usize {
    100
}

fn detail(status: actix_web::http::StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "detail": message.into() }))
}

fn employee_not_found(employee_id: &str) -> HttpResponse {
    detail(
        actix_web::http::StatusCode::NOT_FOUND,
        format!("Employee with ID '{employee_id}' not found"),
    )
}

fn record_not_found() -> HttpResponse {
    detail(
        actix_web::http::StatusCode::NOT_FOUND,
        "Attendance record not found",
    )
}

fn by_date_desc(records: &mut [Value]) {
    records.sort_by(|a, b| {
        b["date"]
            .as_str()
            .unwrap_or_default()
            .cmp(a["date"].as_str().unwrap_or_default())
    });
}

fn page(items: Vec<Value>, query: &PageQuery) -> Vec<Value> {
    items.into_iter().skip(query.skip).take(query.limit).collect()
}

async fn health(backend: web::Data<Backend>, req: HttpRequest) -> HttpResponse {
    backend.log(&req);
    HttpResponse::Ok().json(json!({ "status": "healthy", "service": "HRMS Lite API" }))
}

async fn list_employees(
    backend: web::Data<Backend>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    backend.log(&req);
    let employees = backend.state.lock().unwrap().employees.clone();
    HttpResponse::Ok().json(page(employees, &query))
}

async fn create_employee(
    backend: web::Data<Backend>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.log(&req);
    let body = body.into_inner();

    let email = body["email"].as_str().unwrap_or_default();
    if !email.contains('@') {
        return HttpResponse::UnprocessableEntity().json(json!({
            "detail": [{
                "loc": ["body", "email"],
                "msg": "value is not a valid email address",
                "type": "value_error.email"
            }]
        }));
    }

    let mut state = backend.state.lock().unwrap();
    let employee_id = body["employee_id"].as_str().unwrap_or_default().to_string();
    if state.has_employee(&employee_id) {
        return detail(
            actix_web::http::StatusCode::BAD_REQUEST,
            format!("Employee with ID '{employee_id}' already exists"),
        );
    }

    let mut employee = body;
    employee["_id"] = json!(state.object_id());
    employee["created_at"] = json!("2026-01-15T09:00:00");
    employee["updated_at"] = json!("2026-01-15T09:00:00");
    state.employees.push(employee.clone());
    HttpResponse::Created().json(employee)
}

async fn get_employee(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    backend.log(&req);
    let employee_id = path.into_inner();
    let state = backend.state.lock().unwrap();
    match state.employees.iter().find(|e| e["employee_id"] == employee_id.as_str()) {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => employee_not_found(&employee_id),
    }
}

async fn update_employee(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.log(&req);
    let employee_id = path.into_inner();
    let mut state = backend.state.lock().unwrap();
    let Some(employee) = state
        .employees
        .iter_mut()
        .find(|e| e["employee_id"] == employee_id.as_str())
    else {
        return employee_not_found(&employee_id);
    };

    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            employee[key] = value.clone();
        }
    }
    employee["updated_at"] = json!("2026-01-16T09:00:00");
    HttpResponse::Ok().json(employee.clone())
}

async fn delete_employee(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    backend.log(&req);
    let employee_id = path.into_inner();
    let mut state = backend.state.lock().unwrap();
    if !state.has_employee(&employee_id) {
        return employee_not_found(&employee_id);
    }
    state.employees.retain(|e| e["employee_id"] != employee_id.as_str());
    state.attendance.retain(|r| r["employee_id"] != employee_id.as_str());
    HttpResponse::NoContent().finish()
}

async fn mark_attendance(
    backend: web::Data<Backend>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.log(&req);
    let body = body.into_inner();
    let employee_id = body["employee_id"].as_str().unwrap_or_default().to_string();
    let date = body["date"].as_str().unwrap_or_default().to_string();

    let mut state = backend.state.lock().unwrap();
    if !state.has_employee(&employee_id) {
        return employee_not_found(&employee_id);
    }
    let duplicate = state
        .attendance
        .iter()
        .any(|r| r["employee_id"] == employee_id.as_str() && r["date"] == date.as_str());
    if duplicate {
        return detail(
            actix_web::http::StatusCode::BAD_REQUEST,
            format!("Attendance for employee '{employee_id}' on {date} already marked"),
        );
    }

    let mut record = body;
    record["_id"] = json!(state.object_id());
    record["created_at"] = json!(format!("{date}T09:00:00"));
    state.attendance.push(record.clone());
    HttpResponse::Created().json(record)
}

async fn list_attendance(
    backend: web::Data<Backend>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    backend.log(&req);
    let mut records = backend.state.lock().unwrap().attendance.clone();
    by_date_desc(&mut records);
    HttpResponse::Ok().json(page(records, &query))
}

async fn employee_attendance(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    backend.log(&req);
    let employee_id = path.into_inner();
    let state = backend.state.lock().unwrap();
    if !state.has_employee(&employee_id) {
        return employee_not_found(&employee_id);
    }

    let in_range = |date: &str| {
        query.start_date.as_deref().is_none_or(|start| date >= start)
            && query.end_date.as_deref().is_none_or(|end| date <= end)
    };
    let mut records: Vec<Value> = state
        .attendance
        .iter()
        .filter(|r| r["employee_id"] == employee_id.as_str())
        .filter(|r| in_range(r["date"].as_str().unwrap_or_default()))
        .cloned()
        .collect();
    by_date_desc(&mut records);
    HttpResponse::Ok().json(page(records, &query))
}

async fn attendance_summary(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    backend.log(&req);
    let employee_id = path.into_inner();
    let state = backend.state.lock().unwrap();
    if !state.has_employee(&employee_id) {
        return employee_not_found(&employee_id);
    }

    let records: Vec<&Value> = state
        .attendance
        .iter()
        .filter(|r| r["employee_id"] == employee_id.as_str())
        .collect();
    let total = records.len() as u64;
    let present = records.iter().filter(|r| r["status"] == "Present").count() as u64;
    let percentage = if total == 0 {
        0.0
    } else {
        (present as f64 / total as f64 * 10_000.0).round() / 100.0
    };

    HttpResponse::Ok().json(json!({
        "employee_id": employee_id,
        "total_records": total,
        "present_days": present,
        "absent_days": total - present,
        "attendance_percentage": percentage
    }))
}

async fn get_record(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    backend.log(&req);
    let record_id = path.into_inner();
    let state = backend.state.lock().unwrap();
    match state.attendance.iter().find(|r| r["_id"] == record_id.as_str()) {
        Some(record) => HttpResponse::Ok().json(record),
        None => record_not_found(),
    }
}

async fn update_record(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    backend.log(&req);
    let record_id = path.into_inner();
    let mut state = backend.state.lock().unwrap();
    match state
        .attendance
        .iter_mut()
        .find(|r| r["_id"] == record_id.as_str())
    {
        Some(record) => {
            record["status"] = body["status"].clone();
            HttpResponse::Ok().json(record.clone())
        }
        None => record_not_found(),
    }
}

async fn delete_record(
    backend: web::Data<Backend>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    backend.log(&req);
    let record_id = path.into_inner();
    let mut state = backend.state.lock().unwrap();
    let before = state.attendance.len();
    state.attendance.retain(|r| r["_id"] != record_id.as_str());
    if state.attendance.len() == before {
        return record_not_found();
    }
    HttpResponse::NoContent().finish()
}
