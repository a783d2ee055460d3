use crate::models::submission::{CreateSubmission, WorkSubmission};
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

pub async fn create_submission(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateSubmission>,
) -> impl Responder {
    if body.validate().is_err() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Missing required fields: studentName, workType, content"
        }));
    }

    let now = Utc::now();

    match sqlx::query(
        "INSERT INTO work_submissions (student_name, submission_date, work_type, content, created_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&body.student_name)
    .bind(now)
    .bind(&body.work_type)
    .bind(&body.content)
    .bind(now)
    .execute(pool.get_ref())
    .await
    {
        Ok(result) => HttpResponse::Ok().json(json!({
            "success": true,
            "id": result.last_insert_rowid(),
            "message": "Work submission saved successfully"
        })),
        Err(e) => {
            log::error!("Error inserting submission: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to save submission"
            }))
        }
    }
}

pub async fn list_submissions(pool: web::Data<SqlitePool>) -> impl Responder {
    match sqlx::query_as::<_, WorkSubmission>(
        "SELECT * FROM work_submissions ORDER BY created_at DESC",
    )
    .fetch_all(pool.get_ref())
    .await
    {
        Ok(submissions) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": submissions
        })),
        Err(e) => {
            log::error!("Error fetching submissions: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch submissions"
            }))
        }
    }
}
