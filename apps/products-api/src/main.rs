use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let db = connect_db(&config).await?;

    // Initialize the application state
    let state = AppState { config, db };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs, request logging and CORS
    let router =
        axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.cors).await?;

    // Merge the liveness endpoints
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ping_router());

    info!("Starting products API with graceful shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connection");
            match state.db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

/// Open the database connection and bring the schema up to date.
///
/// A failed connection is logged but NOT fatal: the server starts anyway on
/// a lazily-connecting pool, and requests fail individually (500) until the
/// database comes back.
async fn connect_db(config: &Config) -> eyre::Result<sea_orm::DatabaseConnection> {
    match database::postgres::connect_from_config_with_retry(config.database.clone(), None).await {
        Ok(db) => {
            if let Err(e) =
                database::postgres::run_migrations::<migration::Migrator>(&db, "products_api")
                    .await
            {
                tracing::error!("Failed to run migrations: {}", e);
            }
            info!("Database successfully connected");
            Ok(db)
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("There was an error connecting to the database");
            database::postgres::connect_lazy_from_config(config.database.clone())
                .await
                .map_err(|e| eyre::eyre!("Failed to create lazy database pool: {}", e))
        }
    }
}
