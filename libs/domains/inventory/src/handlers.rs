use axum::{
    Json, Router,
    extract::{OriginalUri, Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, JsonBody, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProductRequest, ListProductsRequest, ProductView, UpdateProductRequest};
use crate::pagination::PagedMeta;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI tag shared by every product endpoint
pub const TAG: &str = "Products";

/// Response header carrying [`PagedMeta`] as camelCase JSON
pub const PAGINATION_HEADER: &str = "x-pagination";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductView, CreateProductRequest, UpdateProductRequest, PagedMeta),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List one page of products ordered by name
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListProductsRequest),
    responses(
        (status = 200, description = "Page of products", body = Vec<ProductView>,
            headers(("X-Pagination" = String, description = "PagedMeta as JSON"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    query: Result<Query<ListProductsRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(request) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let page = service.get_all(request).await?;

    let meta = serde_json::to_string(&page.meta())?;
    let mut headers = HeaderMap::new();
    headers.insert(
        PAGINATION_HEADER,
        HeaderValue::from_str(&meta).map_err(|e| AppError::InternalServerError(e.to_string()))?,
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("X-Pagination"),
    );

    Ok((StatusCode::OK, headers, Json(page.items)).into_response())
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductView,
            headers(("Location" = String, description = "URI of the new product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<CreateProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), product.id);
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&location) {
        headers.insert(header::LOCATION, value);
    }

    Ok((StatusCode::CREATED, headers, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductView),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ProductView>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// Replace every field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<UpdateProductRequest>,
) -> ProductResult<StatusCode> {
    service.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
