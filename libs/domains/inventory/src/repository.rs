use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::product::Product;

/// Repository trait for Product persistence
///
/// Implementations own storage concerns only; ordering of checks and
/// conflict detection live in the use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn add(&self, product: &Product) -> ProductResult<()>;

    /// Overwrite an existing product
    async fn update(&self, product: &Product) -> ProductResult<()>;

    /// Remove a product
    async fn delete(&self, product: &Product) -> ProductResult<()>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// One page ordered by name, plus the total number of products
    async fn get_all(&self, page: u64, page_size: u64) -> ProductResult<(Vec<Product>, u64)>;

    /// Check whether any product carries `sku`
    async fn exists(&self, sku: &str) -> ProductResult<bool>;

    /// True when no product other than `ignore_id` carries `sku`
    async fn is_sku_unique(&self, sku: &str, ignore_id: Uuid) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `products`
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id(), p)).collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

fn sku_taken(products: &HashMap<Uuid, Product>, sku: &str, ignore_id: Uuid) -> bool {
    products
        .values()
        .any(|p| p.id() != ignore_id && p.sku() == sku)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        // Re-checked under the lock; the use case check can race
        if sku_taken(&products, product.sku(), product.id()) {
            return Err(ProductError::sku_conflict(product.sku()));
        }

        products.insert(product.id(), product.clone());
        tracing::debug!(product_id = %product.id(), "Stored product");
        Ok(())
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id()) {
            return Err(ProductError::not_found(product.id()));
        }

        if sku_taken(&products, product.sku(), product.id()) {
            return Err(ProductError::sku_conflict(product.sku()));
        }

        products.insert(product.id(), product.clone());
        tracing::debug!(product_id = %product.id(), "Updated stored product");
        Ok(())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&product.id()).is_some() {
            tracing::debug!(product_id = %product.id(), "Removed stored product");
        }
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn get_all(&self, page: u64, page_size: u64) -> ProductResult<(Vec<Product>, u64)> {
        let products = self.products.read().await;
        let total = products.len() as u64;

        let mut sorted: Vec<&Product> = products.values().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));

        let skip = page.saturating_sub(1).saturating_mul(page_size);
        let items = sorted
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(page_size).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn exists(&self, sku: &str) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.values().any(|p| p.sku() == sku))
    }

    async fn is_sku_unique(&self, sku: &str, ignore_id: Uuid) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(!sku_taken(&products, sku, ignore_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, sku: &str) -> Product {
        Product::new(name, "", Decimal::ONE_HUNDRED, 1, sku).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get_product() {
        let repo = InMemoryProductRepository::new();
        let keyboard = product("Gamer Keyboard", "KB-RGB-001");

        repo.add(&keyboard).await.unwrap();

        let fetched = repo.get_by_id(keyboard.id()).await.unwrap();
        assert_eq!(fetched, Some(keyboard));
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get_by_id(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_duplicate_sku_is_conflict() {
        let repo = InMemoryProductRepository::new();
        repo.add(&product("Gamer Keyboard", "KB-RGB-001")).await.unwrap();

        let result = repo.add(&product("Other Keyboard", "KB-RGB-001")).await;

        assert_eq!(
            result,
            Err(ProductError::Conflict(
                "Product with SKU KB-RGB-001 already exists.".to_string()
            ))
        );
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_sku_is_conflict() {
        let first = product("Mouse", "MSE-00001");
        let mut second = product("Webcam", "CAM-00001");
        let repo = InMemoryProductRepository::with_products([first, second.clone()]);

        second
            .update("Webcam", "", Decimal::ONE_HUNDRED, 1, "MSE-00001")
            .unwrap();

        assert!(matches!(
            repo.update(&second).await,
            Err(ProductError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_update_keeping_own_sku() {
        let mut mouse = product("Mouse", "MSE-00001");
        let repo = InMemoryProductRepository::with_products([mouse.clone()]);

        mouse
            .update("Mouse Pro", "", Decimal::ONE_HUNDRED, 3, "MSE-00001")
            .unwrap();
        repo.update(&mouse).await.unwrap();

        let stored = repo.get_by_id(mouse.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Mouse Pro");
        assert_eq!(stored.stock_quantity(), 3);
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let mouse = product("Mouse", "MSE-00001");
        let repo = InMemoryProductRepository::with_products([mouse.clone()]);

        repo.delete(&mouse).await.unwrap();

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_all_orders_by_name_and_pages() {
        let repo = InMemoryProductRepository::with_products([
            product("Webcam", "CAM-00001"),
            product("Cable", "CBL-00001"),
            product("Mouse", "MSE-00001"),
            product("Adapter", "ADP-00001"),
            product("Keyboard", "KBD-00001"),
        ]);

        let (first, total) = repo.get_all(1, 2).await.unwrap();
        let names: Vec<_> = first.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Adapter", "Cable"]);
        assert_eq!(total, 5);

        let (last, total) = repo.get_all(3, 2).await.unwrap();
        let names: Vec<_> = last.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Webcam"]);
        assert_eq!(total, 5);

        let (beyond, total) = repo.get_all(4, 2).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_exists_and_is_sku_unique() {
        let mouse = product("Mouse", "MSE-00001");
        let repo = InMemoryProductRepository::with_products([mouse.clone()]);

        assert!(repo.exists("MSE-00001").await.unwrap());
        assert!(!repo.exists("MSE-00002").await.unwrap());

        assert!(repo.is_sku_unique("MSE-00001", mouse.id()).await.unwrap());
        assert!(!repo.is_sku_unique("MSE-00001", Uuid::now_v7()).await.unwrap());
        assert!(repo.is_sku_unique("MSE-00002", Uuid::now_v7()).await.unwrap());
    }
}
