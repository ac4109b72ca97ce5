use crate::api::{ConfirmQuery, Console};
use crate::client::DateRange;
use crate::view::attendance::fetch_selection;
use crate::view::form::AttendanceForm;
use crate::view::{AttendancePage, DeleteOutcome, SubmitOutcome};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectionRequest {
    /// Empty string clears the selection
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[serde(flatten)]
    pub range: DateRange,
}

/// Load the attendance page
#[utoipa::path(
    get,
    path = "/ui/attendance",
    responses(
        (status = 200, description = "Attendance page after re-fetching the employee list", body = AttendancePage)
    ),
    tag = "Attendance"
)]
pub async fn load(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.attendance.lock().await;
    view.load().await;
    Ok(HttpResponse::Ok().json(view.page()))
}

/// Select an employee
///
/// Records and summary are fetched concurrently without holding the page.
/// If another selection lands first, this one's results are dropped.
#[utoipa::path(
    put,
    path = "/ui/attendance/selection",
    request_body = SelectionRequest,
    responses(
        (status = 200, description = "Page with the latest selection applied", body = AttendancePage)
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_select", skip(console, body), fields(employee_id = %body.employee_id))]
pub async fn select(
    console: web::Data<Console>,
    body: web::Json<SelectionRequest>,
) -> actix_web::Result<impl Responder> {
    let SelectionRequest { employee_id, range } = body.into_inner();

    let ticket = {
        let mut view = console.attendance.lock().await;
        view.set_range(range);
        view.begin_selection(&employee_id)
    };

    let mut view = match ticket {
        Some(ticket) => {
            let data = fetch_selection(&console.api, &ticket).await;
            let mut view = console.attendance.lock().await;
            if !view.apply_selection(&ticket, data) {
                debug!("Selection superseded before its data arrived");
            }
            view
        }
        None => console.attendance.lock().await,
    };

    Ok(HttpResponse::Ok().json(view.page()))
}

/// Open the mark-attendance form
#[utoipa::path(
    post,
    path = "/ui/attendance-form",
    responses((status = 200, description = "Form opened", body = AttendancePage)),
    tag = "Attendance"
)]
pub async fn open_form(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.attendance.lock().await;
    view.open_form();
    Ok(HttpResponse::Ok().json(view.page()))
}

/// Close the mark-attendance form, discarding its contents
#[utoipa::path(
    delete,
    path = "/ui/attendance-form",
    responses((status = 200, description = "Form closed and reset", body = AttendancePage)),
    tag = "Attendance"
)]
pub async fn close_form(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.attendance.lock().await;
    view.close_form();
    Ok(HttpResponse::Ok().json(view.page()))
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/ui/attendance",
    request_body = AttendanceForm,
    responses(
        (status = 201, description = "Attendance marked, selection refreshed", body = Object, example = json!({
            "outcome": "created",
            "page": {}
        })),
        (status = 422, description = "Form validation failed; nothing was sent", body = Object),
        (status = 502, description = "Backend rejected the record", body = Object)
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_mark", skip(console, form), fields(employee_id = %form.employee_id, date = %form.date))]
pub async fn mark(
    console: web::Data<Console>,
    form: web::Json<AttendanceForm>,
) -> actix_web::Result<impl Responder> {
    let mut view = console.attendance.lock().await;
    view.open_form();
    view.set_form(form.into_inner());

    let outcome = view.submit_mark().await;
    info!(?outcome, "Attendance form submitted");

    let body = json!({ "outcome": outcome, "page": view.page() });
    Ok(match outcome {
        SubmitOutcome::Created => HttpResponse::Created().json(body),
        SubmitOutcome::Invalid => HttpResponse::UnprocessableEntity().json(body),
        SubmitOutcome::Failed => HttpResponse::BadGateway().json(body),
    })
}

/// Delete an attendance record after confirmation
#[utoipa::path(
    delete,
    path = "/ui/attendance/records/{record_id}",
    params(
        ("record_id", Path, description = "Attendance record ID"),
        ConfirmQuery
    ),
    responses(
        (status = 200, description = "Deleted, or cancelled when not confirmed", body = Object, example = json!({
            "outcome": "cancelled",
            "page": {}
        })),
        (status = 502, description = "Backend refused the delete", body = Object)
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_delete", skip(console, query))]
pub async fn delete_record(
    console: web::Data<Console>,
    path: web::Path<String>,
    query: web::Query<ConfirmQuery>,
) -> actix_web::Result<impl Responder> {
    let record_id = path.into_inner();
    let mut view = console.attendance.lock().await;

    let outcome = view.delete_record(&record_id, &query.confirm).await;
    info!(?outcome, record_id = %record_id, "Attendance delete requested");

    let body = json!({ "outcome": outcome, "page": view.page() });
    Ok(match outcome {
        DeleteOutcome::Failed => HttpResponse::BadGateway().json(body),
        DeleteOutcome::Deleted | DeleteOutcome::Cancelled => HttpResponse::Ok().json(body),
    })
}

/// Dismiss a notification
#[utoipa::path(
    delete,
    path = "/ui/attendance/notifications/{id}",
    params(("id", Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Dismissed", body = AttendancePage),
        (status = 404, description = "No such notification", body = Object, example = json!({
            "message": "Notification not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn dismiss(
    console: web::Data<Console>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let mut view = console.attendance.lock().await;
    if !view.notifications().dismiss(path.into_inner()) {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Notification not found"
        })));
    }
    Ok(HttpResponse::Ok().json(view.page()))
}
