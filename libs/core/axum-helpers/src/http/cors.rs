use axum::http::{HeaderName, HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Response headers browsers may read from cross-origin responses.
const EXPOSED_HEADERS: [HeaderName; 2] = [
    header::LOCATION,
    HeaderName::from_static("x-pagination"),
];

/// Creates a CORS layer for the allowed origins.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - Exposes `Location` and `X-Pagination`
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(EXPOSED_HEADERS)
        .max_age(Duration::from_secs(3600))
}
