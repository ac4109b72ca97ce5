use crate::api::{ConfirmQuery, Console};
use crate::view::form::EmployeeForm;
use crate::view::{DeleteOutcome, EmployeePage, SubmitOutcome};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{info, instrument};

/// Load the employee page
#[utoipa::path(
    get,
    path = "/ui/employees",
    responses(
        (status = 200, description = "Employee page after a fresh fetch", body = EmployeePage)
    ),
    tag = "Employees"
)]
pub async fn load(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.employees.lock().await;
    view.load().await;
    Ok(HttpResponse::Ok().json(view.page()))
}

/// Open the add-employee form
#[utoipa::path(
    post,
    path = "/ui/employee-form",
    responses((status = 200, description = "Form opened", body = EmployeePage)),
    tag = "Employees"
)]
pub async fn open_form(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.employees.lock().await;
    view.open_form();
    Ok(HttpResponse::Ok().json(view.page()))
}

/// Close the add-employee form, discarding its contents
#[utoipa::path(
    delete,
    path = "/ui/employee-form",
    responses((status = 200, description = "Form closed and reset", body = EmployeePage)),
    tag = "Employees"
)]
pub async fn close_form(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.employees.lock().await;
    view.close_form();
    Ok(HttpResponse::Ok().json(view.page()))
}

/// Submit the add-employee form
#[utoipa::path(
    post,
    path = "/ui/employees",
    request_body = EmployeeForm,
    responses(
        (status = 201, description = "Employee created, list re-fetched", body = Object, example = json!({
            "outcome": "created",
            "page": {}
        })),
        (status = 422, description = "Form validation failed; nothing was sent", body = Object),
        (status = 502, description = "Backend rejected the employee", body = Object)
    ),
    tag = "Employees"
)]
#[instrument(name = "employee_submit", skip(console, form), fields(employee_id = %form.employee_id))]
pub async fn submit(
    console: web::Data<Console>,
    form: web::Json<EmployeeForm>,
) -> actix_web::Result<impl Responder> {
    let mut view = console.employees.lock().await;
    view.open_form();
    view.set_form(form.into_inner());

    let outcome = view.submit().await;
    info!(?outcome, "Employee form submitted");

    let body = json!({ "outcome": outcome, "page": view.page() });
    Ok(match outcome {
        SubmitOutcome::Created => HttpResponse::Created().json(body),
        SubmitOutcome::Invalid => HttpResponse::UnprocessableEntity().json(body),
        SubmitOutcome::Failed => HttpResponse::BadGateway().json(body),
    })
}

/// Delete an employee after confirmation
#[utoipa::path(
    delete,
    path = "/ui/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ConfirmQuery
    ),
    responses(
        (status = 200, description = "Deleted, or cancelled when not confirmed", body = Object, example = json!({
            "outcome": "deleted",
            "page": {}
        })),
        (status = 502, description = "Backend refused the delete", body = Object)
    ),
    tag = "Employees"
)]
#[instrument(name = "employee_delete", skip(console, query))]
pub async fn delete(
    console: web::Data<Console>,
    path: web::Path<String>,
    query: web::Query<ConfirmQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let mut view = console.employees.lock().await;

    let outcome = view.delete(&employee_id, &query.confirm).await;
    info!(?outcome, employee_id = %employee_id, "Employee delete requested");

    let body = json!({ "outcome": outcome, "page": view.page() });
    Ok(match outcome {
        DeleteOutcome::Failed => HttpResponse::BadGateway().json(body),
        DeleteOutcome::Deleted | DeleteOutcome::Cancelled => HttpResponse::Ok().json(body),
    })
}

/// Dismiss a notification
#[utoipa::path(
    delete,
    path = "/ui/employees/notifications/{id}",
    params(("id", Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Dismissed", body = EmployeePage),
        (status = 404, description = "No such notification", body = Object, example = json!({
            "message": "Notification not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn dismiss(
    console: web::Data<Console>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let mut view = console.employees.lock().await;
    if !view.notifications().dismiss(path.into_inner()) {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Notification not found"
        })));
    }
    Ok(HttpResponse::Ok().json(view.page()))
}
