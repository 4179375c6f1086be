//! API routes module

pub mod health;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// `/ready`, pinging the database when one backs the catalog.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
