use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProductRequest, ProductView};
use crate::product::Product;
use crate::repository::ProductRepository;
use crate::validation::validate_request;

/// Registers a new product after validation and a SKU uniqueness check.
pub struct CreateProduct<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for CreateProduct<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> CreateProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(sku = %request.sku))]
    pub async fn execute(&self, request: CreateProductRequest) -> ProductResult<ProductView> {
        info!(name = %request.name, "Executing create product");

        validate_request(&request)?;

        if self.repository.exists(&request.sku).await? {
            return Err(ProductError::sku_conflict(&request.sku));
        }

        let product = Product::new(
            request.name,
            request.description,
            request.price,
            request.stock_quantity,
            request.sku,
        )?;
        self.repository.add(&product).await?;

        info!(product_id = %product.id(), "Product created");
        Ok(ProductView::from(&product))
    }
}
