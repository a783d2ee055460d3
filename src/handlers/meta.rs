use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Hotel Room Management Backend API",
        "status": "Running",
        "version": "1.0.0",
        "endpoints": {
            "health": "/health",
            "submissions": "/api/submissions",
            "rooms": "/api/rooms"
        }
    }))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": Utc::now()
    }))
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "Endpoint not found"
    }))
}
