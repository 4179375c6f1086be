use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::product::Product;
use crate::validation::{
    validate_name_required, validate_page_size, validate_price, validate_sku_required,
};

/// Maximum page size accepted by the list endpoint
pub const MAX_PAGE_SIZE: i32 = 50;

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(
        custom(function = "validate_name_required"),
        length(max = 100, message = "Name must not exceed 100 characters.")
    )]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 200.0)]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative."))]
    pub stock_quantity: i32,
    #[validate(
        custom(function = "validate_sku_required"),
        length(min = 5, max = 20, message = "SKU must be between 5 and 20 characters.")
    )]
    pub sku: String,
}

/// DTO for replacing every mutable field of an existing product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(
        custom(function = "validate_name_required"),
        length(max = 100, message = "Name must not exceed 100 characters.")
    )]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 180.5)]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative."))]
    pub stock_quantity: i32,
    #[validate(
        custom(function = "validate_sku_required"),
        length(min = 5, max = 20, message = "SKU must be between 5 and 20 characters.")
    )]
    pub sku: String,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListProductsRequest {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1."))]
    pub page: i32,
    /// Items per page (1-50)
    #[serde(default = "default_page_size")]
    #[validate(custom(function = "validate_page_size"))]
    pub page_size: i32,
}

impl Default for ListProductsRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ListProductsRequest {
    pub fn new(page: i32, page_size: i32) -> Self {
        Self { page, page_size }
    }
}

/// Public projection of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 200.0)]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub sku: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price(),
            stock_quantity: product.stock_quantity(),
            sku: product.sku().to_string(),
        }
    }
}
