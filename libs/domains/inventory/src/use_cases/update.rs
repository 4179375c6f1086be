use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::UpdateProductRequest;
use crate::repository::ProductRepository;
use crate::validation::validate_request;

/// Replaces every mutable field of an existing product.
pub struct UpdateProduct<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for UpdateProduct<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> UpdateProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request))]
    pub async fn execute(&self, id: Uuid, request: UpdateProductRequest) -> ProductResult<()> {
        info!("Updating product");

        validate_request(&request)?;

        let mut product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::not_found(id))?;

        if !self.repository.is_sku_unique(&request.sku, id).await? {
            return Err(ProductError::sku_conflict(&request.sku));
        }

        product.update(
            request.name,
            request.description,
            request.price,
            request.stock_quantity,
            request.sku,
        )?;
        self.repository.update(&product).await?;

        info!("Product updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use crate::use_cases::keyboard;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn request() -> UpdateProductRequest {
        UpdateProductRequest {
            name: "Silent Keyboard".to_string(),
            description: "Quiet switches".to_string(),
            price: "180.50".parse().unwrap(),
            stock_quantity: 12,
            sku: "KB-SIL-002".to_string(),
        }
    }

    #[tokio::test]
    async fn test_update_applies_request_in_order() {
        let product = keyboard();
        let id = product.id();
        let mut mock_repo = MockProductRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(product.clone())));
        mock_repo
            .expect_is_sku_unique()
            .withf(move |sku, ignore_id| sku == "KB-SIL-002" && *ignore_id == id)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));
        mock_repo
            .expect_update()
            .withf(move |p| {
                p.id() == id
                    && p.name() == "Silent Keyboard"
                    && p.price() == "180.50".parse::<rust_decimal::Decimal>().unwrap()
                    && p.stock_quantity() == 12
                    && p.sku() == "KB-SIL-002"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        use_case.execute(id, request()).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_and_never_updates() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_is_sku_unique().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        let err = use_case.execute(id, request()).await.unwrap_err();

        assert_eq!(err, ProductError::not_found(id));
    }

    #[tokio::test]
    async fn test_validation_runs_before_lookup() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        let err = use_case
            .execute(
                Uuid::now_v7(),
                UpdateProductRequest {
                    price: "0".parse().unwrap(),
                    ..request()
                },
            )
            .await
            .unwrap_err();

        match err {
            ProductError::Validation(errors) => assert!(errors.contains_key("Price")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sku_taken_by_another_product_is_conflict() {
        let product = keyboard();
        let id = product.id();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        mock_repo.expect_is_sku_unique().returning(|_, _| Ok(false));
        mock_repo.expect_update().never();

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        let err = use_case.execute(id, request()).await.unwrap_err();

        assert_eq!(
            err,
            ProductError::Conflict("Product with SKU KB-SIL-002 already exists.".to_string())
        );
    }

    #[tokio::test]
    async fn test_lookup_fault_passes_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(ProductError::Unhandled("Database error: connection reset".to_string())));
        mock_repo.expect_is_sku_unique().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        let err = use_case.execute(Uuid::now_v7(), request()).await.unwrap_err();

        assert_eq!(err, ProductError::Unhandled("Database error: connection reset".to_string()));
    }

    #[tokio::test]
    async fn test_sku_check_fault_passes_through() {
        let product = keyboard();
        let id = product.id();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        mock_repo
            .expect_is_sku_unique()
            .returning(|_, _| Err(ProductError::Unhandled("Database error: connection reset".to_string())));
        mock_repo.expect_update().never();

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        let err = use_case.execute(id, request()).await.unwrap_err();

        assert_eq!(err, ProductError::Unhandled("Database error: connection reset".to_string()));
    }

    #[tokio::test]
    async fn test_update_fault_after_sku_check_passes_through() {
        let product = keyboard();
        let id = product.id();
        let mut mock_repo = MockProductRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(product.clone())));
        mock_repo
            .expect_is_sku_unique()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));
        mock_repo
            .expect_update()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ProductError::Unhandled("Database error: connection reset".to_string())));

        let use_case = UpdateProduct::new(Arc::new(mock_repo));
        let err = use_case.execute(id, request()).await.unwrap_err();

        assert_eq!(err, ProductError::Unhandled("Database error: connection reset".to_string()));
    }
}
