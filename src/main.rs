use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use anizen::shared::utils::init_logger;
use anizen::shared::Database;
use anizen::{build_router, AppState};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let database = Arc::new(Database::new()?);

    // Run migrations if the database is reachable, otherwise continue with
    // degraded functionality and let the pool retry per request
    match database.get_connection() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run database migrations: {}", e);
                log::warn!("Application will continue with limited functionality");
            } else {
                log::info!("Database migrations completed successfully");
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection for migrations: {}", e);
            log::warn!("Application will continue with limited functionality");
        }
    }

    let state = Arc::new(AppState::new(database));
    let router = build_router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server listening on http://{}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
