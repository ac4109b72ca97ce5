use crate::api::{attendance, dashboard, employee, health};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health::health)));

    cfg.service(
        web::scope("/ui")
            .service(web::resource("/dashboard").route(web::get().to(dashboard::load)))
            // /ui/employee-form
            .service(
                web::resource("/employee-form")
                    .route(web::post().to(employee::open_form))
                    .route(web::delete().to(employee::close_form)),
            )
            .service(
                web::scope("/employees")
                    // /ui/employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::load))
                            .route(web::post().to(employee::submit)),
                    )
                    // /ui/employees/notifications/{id}
                    .service(
                        web::resource("/notifications/{id}")
                            .route(web::delete().to(employee::dismiss)),
                    )
                    // /ui/employees/{id}
                    .service(web::resource("/{id}").route(web::delete().to(employee::delete))),
            )
            // /ui/attendance-form
            .service(
                web::resource("/attendance-form")
                    .route(web::post().to(attendance::open_form))
                    .route(web::delete().to(attendance::close_form)),
            )
            .service(
                web::scope("/attendance")
                    // /ui/attendance
                    .service(
                        web::resource("")
                            .route(web::get().to(attendance::load))
                            .route(web::post().to(attendance::mark)),
                    )
                    // /ui/attendance/selection
                    .service(
                        web::resource("/selection").route(web::put().to(attendance::select)),
                    )
                    // /ui/attendance/records/{id}
                    .service(
                        web::resource("/records/{id}")
                            .route(web::delete().to(attendance::delete_record)),
                    )
                    // /ui/attendance/notifications/{id}
                    .service(
                        web::resource("/notifications/{id}")
                            .route(web::delete().to(attendance::dismiss)),
                    ),
            ),
    );
}
