use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::product::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    pub stock_quantity: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))", unique)]
    pub sku: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Rows were validated on write
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product::from_parts(
            model.id,
            model.name,
            model.description,
            model.price,
            model.stock_quantity,
            model.sku,
        )
    }
}

impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            id: Set(product.id()),
            name: Set(product.name().to_string()),
            description: Set(product.description().to_string()),
            price: Set(product.price()),
            stock_quantity: Set(product.stock_quantity()),
            sku: Set(product.sku().to_string()),
        }
    }
}
