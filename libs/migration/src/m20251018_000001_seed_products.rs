use sea_orm::prelude::Decimal;
use sea_orm_migration::prelude::*;

use crate::demo_catalog::DEMO_PRODUCTS;
use crate::m20251018_000000_create_products::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Products::Table).columns([
            Products::Id,
            Products::Name,
            Products::Description,
            Products::Price,
            Products::StockQuantity,
            Products::Sku,
        ]);

        for product in DEMO_PRODUCTS {
            insert
                .values([
                    product.id.into(),
                    product.name.into(),
                    product.description.into(),
                    Decimal::from(product.price).into(),
                    product.stock_quantity.into(),
                    product.sku.into(),
                ])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        // Existing SKUs are left untouched
        insert.on_conflict(OnConflict::column(Products::Sku).do_nothing().to_owned());

        manager.get_connection().execute(&insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Products::Table)
            .and_where(Expr::col(Products::Id).is_in(DEMO_PRODUCTS.map(|p| p.id)))
            .to_owned();

        manager.get_connection().execute(&delete).await?;

        Ok(())
    }
}
