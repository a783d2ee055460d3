use actix_web::{web, HttpResponse};
use serde_json::json;

pub mod auth;
pub mod db;
pub mod handlers;
pub mod models;

// A body that fails to deserialize gets the generic catch-all response
// instead of the framework's default 400.
fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": "Something went wrong!"
        }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Route table shared by the server binary and the integration tests.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_error_config())
        .route("/", web::get().to(handlers::meta::index))
        .route("/health", web::get().to(handlers::meta::health))
        .service(
            web::scope("/api/submissions")
                .route("", web::post().to(handlers::submissions::create_submission))
                .route("", web::get().to(handlers::submissions::list_submissions)),
        )
        .service(
            web::scope("/api/rooms")
                .route("", web::get().to(handlers::rooms::list_rooms))
                .route("", web::post().to(handlers::rooms::create_room))
                .route("/{id}", web::put().to(handlers::rooms::update_room))
                .route("/{id}", web::delete().to(handlers::rooms::delete_room))
                .route(
                    "/{id}/status",
                    web::patch().to(handlers::rooms::update_room_status),
                ),
        )
        .default_service(web::route().to(handlers::meta::not_found));
}
