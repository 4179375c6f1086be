//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::errors::AppError) so a
//! malformed path or body gets the same JSON error shape as any other failure.

pub mod json_body;
pub mod uuid_path;

pub use json_body::JsonBody;
pub use uuid_path::UuidPath;
