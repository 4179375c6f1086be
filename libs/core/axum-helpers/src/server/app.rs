use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::http::HeaderValue;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

const CORS_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// Parse a comma-separated origin list.
fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ENV, e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ENV),
        ));
    }

    Ok(origins)
}

/// Read the allowed CORS origins from `CORS_ALLOWED_ORIGIN`.
///
/// The variable is required and holds comma-separated origins, e.g.
/// `CORS_ALLOWED_ORIGIN=http://localhost:3000,https://shop.example.com`.
pub fn allowed_origins_from_env() -> io::Result<Vec<HeaderValue>> {
    let raw = std::env::var(CORS_ENV).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} environment variable is required. Example: {}=http://localhost:3000",
                CORS_ENV, CORS_ENV
            ),
        )
    })?;

    let origins = parse_origins(&raw)?;
    info!("CORS configured with allowed origins: {}", raw);
    Ok(origins)
}

/// Creates the application router around already-stated API routes.
///
/// - OpenAPI documentation: Swagger UI at `/swagger-ui` serving
///   `/api-docs/openapi.json`, plus ReDoc, RapiDoc and Scalar
/// - API routes nested under `/api`
/// - JSON 404 fallback
/// - Tracing, security headers, CORS and response compression
///
/// Health endpoints are merged in by the app with [`health_router`](super::health_router).
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is missing, empty or malformed.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(allowed_origins_from_env()?);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` under
/// `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// create_production_app(
///     router,
///     &config.server,
///     Duration::from_secs(30),
///     async move { close_postgres(db, "inventory").await },
/// ).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}
