use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

fn default_status() -> String {
    "available".to_string()
}

fn default_capacity() -> i64 {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[validate(length(min = 1))]
    pub room_number: String,
    #[validate(length(min = 1))]
    pub room_type: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default = "default_status")]
    pub status: String,
    pub floor: Option<i64>,
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

/// Full-row replacement payload for PUT; the id never changes.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    #[validate(length(min = 1))]
    pub room_number: String,
    #[validate(length(min = 1))]
    pub room_type: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub status: String,
    pub floor: Option<i64>,
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}
