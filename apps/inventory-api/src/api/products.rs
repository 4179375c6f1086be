//! Products API routes

use axum::Router;
use domain_inventory::{PgProductRepository, ProductService, handlers};

use crate::state::{AppState, Catalog};

pub fn router(state: &AppState) -> Router {
    match &state.catalog {
        Catalog::Postgres(db) => {
            handlers::router(ProductService::new(PgProductRepository::new(db.clone())))
        }
        Catalog::InMemory(repository) => handlers::router(ProductService::new(repository.clone())),
    }
}
