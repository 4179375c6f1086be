use std::sync::Arc;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProductRequest, ListProductsRequest, ProductView, UpdateProductRequest};
use crate::pagination::PagedResult;
use crate::repository::ProductRepository;
use crate::use_cases::{CreateProduct, DeleteProduct, GetAllProducts, GetProductById, UpdateProduct};

/// Service layer bundling the product use cases over one shared repository
pub struct ProductService<R: ProductRepository> {
    create: CreateProduct<R>,
    get_by_id: GetProductById<R>,
    get_all: GetAllProducts<R>,
    update: UpdateProduct<R>,
    delete: DeleteProduct<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            get_by_id: self.get_by_id.clone(),
            get_all: self.get_all.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Build the service over a repository that is also held elsewhere
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self {
            create: CreateProduct::new(Arc::clone(&repository)),
            get_by_id: GetProductById::new(Arc::clone(&repository)),
            get_all: GetAllProducts::new(Arc::clone(&repository)),
            update: UpdateProduct::new(Arc::clone(&repository)),
            delete: DeleteProduct::new(repository),
        }
    }

    /// Create a new product
    pub async fn create(&self, request: CreateProductRequest) -> ProductResult<ProductView> {
        self.create.execute(request).await
    }

    /// Get a product by ID
    pub async fn get_by_id(&self, id: Uuid) -> ProductResult<ProductView> {
        self.get_by_id.execute(id).await
    }

    /// List one page of products
    pub async fn get_all(&self, request: ListProductsRequest) -> ProductResult<PagedResult<ProductView>> {
        self.get_all.execute(request).await
    }

    /// Update a product
    pub async fn update(&self, id: Uuid, request: UpdateProductRequest) -> ProductResult<()> {
        self.update.execute(id, request).await
    }

    /// Delete a product
    pub async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.delete.execute(id).await
    }
}
