//! Inventory Domain
//!
//! Product catalog: create, read (single and paged), update and delete
//! products while keeping the aggregate's invariants and SKU uniqueness.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, X-Pagination header
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Facade over the use cases
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← Validation, conflict checks, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │ ──▶ │   Product   │  ← Aggregate invariants
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod product;
pub mod repository;
pub mod seed;
pub mod service;
pub mod use_cases;
pub mod validation;

// Re-export commonly used types
pub use error::{FieldErrors, ProductError, ProductResult};
pub use models::{CreateProductRequest, ListProductsRequest, ProductView, UpdateProductRequest};
pub use pagination::{PagedMeta, PagedResult};
pub use postgres::PgProductRepository;
pub use product::{DomainError, Product};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
