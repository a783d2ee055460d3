use crate::auth;
use crate::models::room::{Room, RoomUpdate};
use crate::models::user::Actor;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub room: Option<Room>,
    pub user: Option<Actor>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    pub updates: Option<RoomUpdate>,
    pub user: Option<Actor>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRoomRequest {
    pub user: Option<Actor>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
    pub user: Option<Actor>,
}

fn forbidden(message: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(json!({ "success": false, "error": message }))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map_or(false, |db_err| db_err.is_unique_violation())
}

pub async fn list_rooms(pool: web::Data<SqlitePool>) -> impl Responder {
    match sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY room_number")
        .fetch_all(pool.get_ref())
        .await
    {
        Ok(rooms) => HttpResponse::Ok().json(json!({ "success": true, "data": rooms })),
        Err(e) => {
            log::error!("Error fetching rooms: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch rooms"
            }))
        }
    }
}

pub async fn create_room(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateRoomRequest>,
) -> impl Responder {
    let body = body.into_inner();

    if !auth::authorize(body.user.as_ref(), &[auth::ADMIN]) {
        return forbidden("Admin permission required");
    }

    let room = match body.room {
        Some(room) => room,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": "Missing required field: room"
            }))
        }
    };

    if room.validate().is_err() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Invalid room payload"
        }));
    }

    // The stored updated_by is always the creator, whatever the caller sent.
    match sqlx::query(
        r#"
        INSERT INTO rooms
            (id, room_number, room_type, price, status, floor, capacity, description,
             created_at, created_by, updated_at, updated_by)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&room.id)
    .bind(&room.room_number)
    .bind(&room.room_type)
    .bind(room.price)
    .bind(&room.status)
    .bind(room.floor)
    .bind(room.capacity)
    .bind(&room.description)
    .bind(room.created_at)
    .bind(&room.created_by)
    .bind(room.updated_at)
    .bind(&room.created_by)
    .execute(pool.get_ref())
    .await
    {
        Ok(_) => HttpResponse::Ok().json(json!({ "success": true, "data": room })),
        Err(e) if is_unique_violation(&e) => HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Room number already exists"
        })),
        Err(e) => {
            log::error!("Error adding room: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to add room"
            }))
        }
    }
}

pub async fn update_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<UpdateRoomRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let body = body.into_inner();

    if !auth::authorize(body.user.as_ref(), &[auth::ADMIN]) {
        return forbidden("Admin permission required");
    }

    let updates = match body.updates {
        Some(updates) => updates,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": "Missing required field: updates"
            }))
        }
    };

    if updates.validate().is_err() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Invalid updates payload"
        }));
    }

    match sqlx::query(
        r#"
        UPDATE rooms
        SET room_number = ?, room_type = ?, price = ?, status = ?, floor = ?,
            capacity = ?, description = ?, updated_at = ?, updated_by = ?
        WHERE id = ?
        "#,
    )
    .bind(&updates.room_number)
    .bind(&updates.room_type)
    .bind(updates.price)
    .bind(&updates.status)
    .bind(updates.floor)
    .bind(updates.capacity)
    .bind(&updates.description)
    .bind(updates.updated_at)
    .bind(&updates.updated_by)
    .bind(&id)
    .execute(pool.get_ref())
    .await
    {
        // The caller's payload is echoed back, not a re-read of the row.
        Ok(result) if result.rows_affected() > 0 => {
            HttpResponse::Ok().json(json!({ "success": true, "data": updates }))
        }
        Ok(_) => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "Room not found"
        })),
        Err(e) if is_unique_violation(&e) => HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Room number already exists"
        })),
        Err(e) => {
            log::error!("Error updating room: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to update room"
            }))
        }
    }
}

pub async fn delete_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: Option<web::Json<DeleteRoomRequest>>,
) -> impl Responder {
    let id = path.into_inner();
    let user = body.and_then(|b| b.into_inner().user);

    if !auth::authorize(user.as_ref(), &[auth::ADMIN]) {
        return forbidden("Admin permission required");
    }

    match sqlx::query("DELETE FROM rooms WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await
    {
        Ok(result) if result.rows_affected() > 0 => {
            HttpResponse::Ok().json(json!({ "success": true }))
        }
        Ok(_) => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "Room not found"
        })),
        Err(e) => {
            log::error!("Error deleting room: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to delete room"
            }))
        }
    }
}

pub async fn update_room_status(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let body = body.into_inner();

    // Status updates are open to students as well as admins.
    let actor = match body.user {
        Some(ref user) if auth::authorize(Some(user), &[auth::ADMIN, auth::STUDENT]) => user,
        _ => return forbidden("Permission required"),
    };

    if body.status.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Missing required field: status"
        }));
    }

    let now = Utc::now();

    match sqlx::query("UPDATE rooms SET status = ?, updated_at = ?, updated_by = ? WHERE id = ?")
        .bind(&body.status)
        .bind(now)
        .bind(&actor.email)
        .bind(&id)
        .execute(pool.get_ref())
        .await
    {
        Ok(result) if result.rows_affected() > 0 => HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "status": body.status, "updatedAt": now }
        })),
        Ok(_) => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "Room not found"
        })),
        Err(e) => {
            log::error!("Error updating room status: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to update room status"
            }))
        }
    }
}
