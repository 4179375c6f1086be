use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    product::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed product repository
///
/// SKU uniqueness is enforced by the `idx_products_sku` index; a violation
/// surfaces as [`ProductError::Conflict`] even when two writers race past the
/// use-case check.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn write_error(err: DbErr, product: &Product) -> ProductError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::sku_conflict(product.sku()),
        _ => err.into(),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn add(&self, product: &Product) -> ProductResult<()> {
        entity::ActiveModel::from(product)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, product))?;

        tracing::debug!(product_id = %product.id(), "Inserted product row");
        Ok(())
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        match entity::ActiveModel::from(product).update(&self.db).await {
            Ok(_) => {
                tracing::debug!(product_id = %product.id(), "Updated product row");
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(ProductError::not_found(product.id())),
            Err(e) => Err(write_error(e, product)),
        }
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(product.id())
            .exec(&self.db)
            .await?;

        tracing::debug!(
            product_id = %product.id(),
            rows_affected = result.rows_affected,
            "Deleted product row"
        );
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn get_all(&self, page: u64, page_size: u64) -> ProductResult<(Vec<Product>, u64)> {
        let total = entity::Entity::find().count(&self.db).await?;

        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .order_by_asc(entity::Column::Id)
            .offset(page.saturating_sub(1).saturating_mul(page_size))
            .limit(page_size)
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Product::from).collect(), total))
    }

    async fn exists(&self, sku: &str) -> ProductResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn is_sku_unique(&self, sku: &str, ignore_id: Uuid) -> ProductResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .filter(entity::Column::Id.ne(ignore_id))
            .count(&self.db)
            .await?;

        Ok(count == 0)
    }
}
