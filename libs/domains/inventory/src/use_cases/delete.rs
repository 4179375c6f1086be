use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::repository::ProductRepository;

pub struct DeleteProduct<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for DeleteProduct<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> DeleteProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: Uuid) -> ProductResult<()> {
        info!("Deleting product");

        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::not_found(id))?;

        self.repository.delete(&product).await?;

        info!("Product deleted");
        Ok(())
    }
}
