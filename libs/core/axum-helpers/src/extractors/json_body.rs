//! JSON body extractor with uniform error responses.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but rejects with
/// [`AppError::JsonExtractorRejection`], so a missing content type or broken
/// payload is reported as `JSON_EXTRACTION` in the standard error body.
/// Field-level validation is left to the caller.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateProduct {
///     name: String,
/// }
///
/// async fn create(JsonBody(payload): JsonBody<CreateProduct>) -> String {
///     payload.name
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
