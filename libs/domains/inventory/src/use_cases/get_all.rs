use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::ProductResult;
use crate::models::{ListProductsRequest, ProductView};
use crate::pagination::PagedResult;
use crate::repository::ProductRepository;
use crate::validation::validate_request;

/// Lists one page of the catalog ordered by name.
pub struct GetAllProducts<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for GetAllProducts<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> GetAllProducts<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: ListProductsRequest) -> ProductResult<PagedResult<ProductView>> {
        info!(page = request.page, page_size = request.page_size, "Getting all products");

        validate_request(&request)?;

        // Both are positive once validated
        let page = u64::from(request.page.unsigned_abs());
        let page_size = u64::from(request.page_size.unsigned_abs());

        let (products, total) = self.repository.get_all(page, page_size).await?;
        let items = products.iter().map(ProductView::from).collect();

        Ok(PagedResult::new(items, total, page, page_size))
    }
}
