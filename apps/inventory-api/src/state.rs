//! Application state management

use database::postgres::DatabaseConnection;
use domain_inventory::InMemoryProductRepository;

/// Where the product catalog is stored.
#[derive(Clone)]
pub enum Catalog {
    Postgres(DatabaseConnection),
    InMemory(InMemoryProductRepository),
}

impl Catalog {
    pub fn backend(&self) -> &'static str {
        match self {
            Catalog::Postgres(_) => "postgres",
            Catalog::InMemory(_) => "in-memory",
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: Catalog,
}
