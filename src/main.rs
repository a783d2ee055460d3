use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use hotel_room_backend::{app_config, db};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&database_url)
        .await
        .expect("Failed to create pool");

    // Run migrations
    log::info!("Running migrations...");
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    log::info!("Seeding sample rooms...");
    db::seed_rooms(&pool).await.expect("Failed to seed rooms");

    log::info!("Starting server at http://localhost:{}", port);
    log::info!("  GET    /                     - API information");
    log::info!("  GET    /health               - Health check");
    log::info!("  POST   /api/submissions      - Submit work");
    log::info!("  GET    /api/submissions      - Get submissions");
    log::info!("  GET    /api/rooms            - Get all rooms");
    log::info!("  POST   /api/rooms            - Add new room (admin)");
    log::info!("  PUT    /api/rooms/{{id}}       - Update room (admin)");
    log::info!("  DELETE /api/rooms/{{id}}       - Delete room (admin)");
    log::info!("  PATCH  /api/rooms/{{id}}/status - Update room status");

    let pool_data = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .wrap(middleware::Logger::default())
            .configure(app_config)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
