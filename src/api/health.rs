use crate::api::Console;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::warn;

/// Console and backend health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Console up, backend reachable", body = Object, example = json!({
            "status": "healthy",
            "service": "HRMS Lite Console",
            "backend": { "status": "healthy", "service": "HRMS Lite API" }
        })),
        (status = 503, description = "Console up, backend unreachable", body = Object, example = json!({
            "status": "degraded",
            "service": "HRMS Lite Console",
            "backend": null,
            "error": "HTTP error: error sending request"
        }))
    ),
    tag = "Health"
)]
pub async fn health(console: web::Data<Console>) -> impl Responder {
    match console.api.health().await {
        Ok(backend) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "service": "HRMS Lite Console",
            "backend": backend
        })),
        Err(e) => {
            warn!(error = %e, "Backend health check failed");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "degraded",
                "service": "HRMS Lite Console",
                "backend": null,
                "error": e.to_string()
            }))
        }
    }
}
