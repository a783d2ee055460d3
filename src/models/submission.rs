use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkSubmission {
    pub id: i64,
    pub student_name: String,
    pub submission_date: DateTime<Utc>,
    pub work_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// Absent fields default to empty and fail the length check, so missing and
// empty inputs are rejected the same way.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmission {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub student_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub work_type: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub content: String,
}
