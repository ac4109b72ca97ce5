use crate::api::Console;
use crate::view::DashboardStats;
use actix_web::{HttpResponse, Responder, web};

/// Dashboard overview
///
/// Employee count, attendance count, present-today count, average
/// attendance and the most recent records. Stats from the previous load are
/// returned if the backend cannot be reached.
#[utoipa::path(
    get,
    path = "/ui/dashboard",
    responses(
        (status = 200, description = "Dashboard stats", body = DashboardStats)
    ),
    tag = "Dashboard"
)]
pub async fn load(console: web::Data<Console>) -> actix_web::Result<impl Responder> {
    let mut view = console.dashboard.lock().await;
    let stats = view.load().await;
    Ok(HttpResponse::Ok().json(stats))
}
