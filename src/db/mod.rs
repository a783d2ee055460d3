use chrono::Utc;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SAMPLE_ROOMS: [(&str, &str, &str, f64, &str, i64, i64, &str); 3] = [
    (
        "room_1",
        "101",
        "standard",
        2500.0,
        "available",
        1,
        2,
        "Standard room with garden view",
    ),
    (
        "room_2",
        "102",
        "deluxe",
        3500.0,
        "occupied",
        1,
        2,
        "Deluxe room with city view",
    ),
    (
        "room_3",
        "201",
        "suite",
        5000.0,
        "dirty",
        2,
        4,
        "Executive suite with balcony",
    ),
];

pub async fn get_db_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqlitePoolOptions::new().max_connections(5);

    // An in-memory SQLite database exists per connection; pin the pool to a
    // single connection that is never recycled, or each request would see its
    // own empty database.
    if database_url.contains(":memory:") {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    options.connect(database_url).await
}

/// Inserts the demo rooms, skipping any that already exist.
pub async fn seed_rooms(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    for (id, room_number, room_type, price, status, floor, capacity, description) in SAMPLE_ROOMS {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO rooms
                (id, room_number, room_type, price, status, floor, capacity, description,
                 created_at, created_by, updated_at, updated_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 'system', ?, 'system')
            "#,
        )
        .bind(id)
        .bind(room_number)
        .bind(room_type)
        .bind(price)
        .bind(status)
        .bind(floor)
        .bind(capacity)
        .bind(description)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    }

    Ok(())
}
