//! Inventory API - product catalog over REST

use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_inventory::{InMemoryProductRepository, seed};
use eyre::WrapErr;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Catalog};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let catalog = match config.database.clone() {
        Some(pg_config) => {
            let db = database::postgres::connect_from_config_with_retry(pg_config, None)
                .await
                .wrap_err("PostgreSQL connection failed")?;
            database::postgres::run_migrations::<Migrator>(&db, config.app.name)
                .await
                .wrap_err("Database migrations failed")?;
            Catalog::Postgres(db)
        }
        None => {
            info!("DATABASE_URL not set, serving the demo catalog from memory");
            let products = seed::demo_catalog().wrap_err("Demo catalog is invalid")?;
            Catalog::InMemory(InMemoryProductRepository::with_products(products))
        }
    };

    let state = AppState { config, catalog };
    info!("Product catalog backend: {}", state.catalog.backend());

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting Inventory API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Catalog::Postgres(db) = state.catalog {
                close_postgres(db, "inventory").await;
            }
        },
    )
    .await
    .wrap_err("Server error")?;

    info!("Inventory API shutdown complete");
    Ok(())
}
