use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::ProductView;
use crate::repository::ProductRepository;

pub struct GetProductById<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for GetProductById<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> GetProductById<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: Uuid) -> ProductResult<ProductView> {
        info!("Getting product");

        self.repository
            .get_by_id(id)
            .await?
            .map(|product| ProductView::from(&product))
            .ok_or_else(|| ProductError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use crate::use_cases::keyboard;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_returns_view_of_stored_product() {
        let product = keyboard();
        let id = product.id();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(2)
            .returning(move |_| Ok(Some(product.clone())));

        let use_case = GetProductById::new(Arc::new(mock_repo));
        let first = use_case.execute(id).await.unwrap();
        let second = use_case.execute(id).await.unwrap();

        assert_eq!(first.id, id);
        assert_eq!(first.sku, "KB-RGB-001");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetProductById::new(Arc::new(mock_repo));
        let err = use_case.execute(id).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Product with Id '{}' not found.", id)
        );
    }

    #[tokio::test]
    async fn test_repository_fault_passes_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(|_| Err(ProductError::Unhandled("Database error: connection reset".to_string())));

        let use_case = GetProductById::new(Arc::new(mock_repo));
        let err = use_case.execute(Uuid::now_v7()).await.unwrap_err();

        assert_eq!(err, ProductError::Unhandled("Database error: connection reset".to_string()));
    }
}
