//! Demo catalog used to pre-fill an empty in-memory store.
//!
//! The rows come from [`migration::demo_catalog`], the same list the seed
//! migration writes to Postgres, so both backends start with identical ids.

use migration::demo_catalog::DEMO_PRODUCTS;
use rust_decimal::Decimal;

use crate::product::{DomainError, Product};

/// Build the demo catalog as validated aggregates with their seeded ids.
pub fn demo_catalog() -> Result<Vec<Product>, DomainError> {
    DEMO_PRODUCTS
        .iter()
        .map(|demo| {
            let product = Product::new(
                demo.name,
                demo.description,
                Decimal::from(demo.price),
                demo.stock_quantity,
                demo.sku,
            )?;
            Ok(Product::from_parts(
                demo.id,
                product.name().to_string(),
                product.description().to_string(),
                product.price(),
                product.stock_quantity(),
                product.sku().to_string(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_demo_catalog_keeps_seeded_ids() {
        let catalog = demo_catalog().unwrap();

        for (product, demo) in catalog.iter().zip(DEMO_PRODUCTS.iter()) {
            assert_eq!(product.id(), demo.id);
            assert_eq!(product.sku(), demo.sku);
            assert_eq!(product.price(), Decimal::from(demo.price));
        }
    }
}
