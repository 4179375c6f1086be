use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Invariant violations raised by the [`Product`] aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Price must be greater than zero.")]
    NonPositivePrice,

    #[error("Price must have at most 2 decimal places.")]
    PriceTooPrecise,

    #[error("Stock quantity cannot be negative.")]
    NegativeStock,

    #[error("SKU cannot be empty.")]
    EmptySku,

    #[error("Quantity must be positive.")]
    NonPositiveQuantity,

    #[error("Insufficient stock.")]
    InsufficientStock,

    #[error("Stock quantity overflow.")]
    StockOverflow,
}

/// Decimal places a price may carry; storage keeps exactly this many.
pub const PRICE_SCALE: u32 = 2;

/// Product aggregate root.
///
/// Fields are private: a `Product` can only be obtained through [`Product::new`]
/// (or rehydrated by a repository) and only mutated through [`Product::update`],
/// [`Product::add_stock`] and [`Product::remove_stock`]. Every mutator either
/// succeeds completely or leaves the aggregate untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    stock_quantity: i32,
    sku: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: i32,
        sku: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let sku = sku.into();
        validate_domain(&name, price, stock_quantity, &sku)?;

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            description: description.into(),
            price,
            stock_quantity,
            sku,
        })
    }

    /// Rebuild an aggregate from persisted state without assigning a new id.
    pub(crate) fn from_parts(
        id: Uuid,
        name: String,
        description: String,
        price: Decimal,
        stock_quantity: i32,
        sku: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock_quantity,
            sku,
        }
    }

    /// Replace every mutable field, re-checking all invariants first.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: i32,
        sku: impl Into<String>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        let sku = sku.into();
        validate_domain(&name, price, stock_quantity, &sku)?;

        self.name = name;
        self.description = description.into();
        self.price = price;
        self.stock_quantity = stock_quantity;
        self.sku = sku;
        Ok(())
    }

    pub fn add_stock(&mut self, quantity: i32) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::NonPositiveQuantity);
        }

        self.stock_quantity = self
            .stock_quantity
            .checked_add(quantity)
            .ok_or(DomainError::StockOverflow)?;
        Ok(())
    }

    pub fn remove_stock(&mut self, quantity: i32) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::NonPositiveQuantity);
        }

        if quantity > self.stock_quantity {
            return Err(DomainError::InsufficientStock);
        }

        self.stock_quantity -= quantity;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }
}

// Checked in a fixed order: name, price, stock, sku.
fn validate_domain(name: &str, price: Decimal, stock: i32, sku: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }

    if price <= Decimal::ZERO {
        return Err(DomainError::NonPositivePrice);
    }

    if price.normalize().scale() > PRICE_SCALE {
        return Err(DomainError::PriceTooPrecise);
    }

    if stock < 0 {
        return Err(DomainError::NegativeStock);
    }

    if sku.trim().is_empty() {
        return Err(DomainError::EmptySku);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn keyboard() -> Product {
        Product::new(
            "Gamer Keyboard",
            "RGB mechanical keyboard",
            price("200.00"),
            5,
            "KB-RGB-001",
        )
        .unwrap()
    }

    #[test]
    fn test_new_product_keeps_fields_and_assigns_id() {
        let product = keyboard();

        assert!(!product.id().is_nil());
        assert_eq!(product.name(), "Gamer Keyboard");
        assert_eq!(product.description(), "RGB mechanical keyboard");
        assert_eq!(product.price(), price("200.00"));
        assert_eq!(product.stock_quantity(), 5);
        assert_eq!(product.sku(), "KB-RGB-001");
    }

    #[test]
    fn test_new_products_get_distinct_ids() {
        assert_ne!(keyboard().id(), keyboard().id());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = Product::new("   ", "", price("10"), 1, "SKU-00001");
        assert_eq!(result.unwrap_err(), DomainError::EmptyName);
    }

    #[test]
    fn test_new_rejects_non_positive_price() {
        let zero = Product::new("Mouse", "", Decimal::ZERO, 1, "SKU-00001");
        assert_eq!(zero.unwrap_err(), DomainError::NonPositivePrice);

        let negative = Product::new("Mouse", "", price("-0.01"), 1, "SKU-00001");
        assert_eq!(negative.unwrap_err(), DomainError::NonPositivePrice);
    }

    #[test]
    fn test_new_rejects_sub_cent_price() {
        for value in ["0.004", "19.999", "1.0001"] {
            let result = Product::new("Mouse", "", price(value), 1, "SKU-00001");
            assert_eq!(result.unwrap_err(), DomainError::PriceTooPrecise);
        }
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let product = Product::new("Mouse", "", price("19.9000"), 1, "SKU-00001").unwrap();
        assert_eq!(product.price(), price("19.90"));
    }

    #[test]
    fn test_update_rejects_sub_cent_price_and_keeps_state() {
        let mut product = keyboard();
        let before = product.clone();

        let result = product.update("Keyboard", "", price("0.004"), 5, "KB-RGB-001");

        assert_eq!(result.unwrap_err(), DomainError::PriceTooPrecise);
        assert_eq!(product, before);
    }

    #[test]
    fn test_new_rejects_negative_stock() {
        let result = Product::new("Mouse", "", price("10"), -1, "SKU-00001");
        assert_eq!(result.unwrap_err(), DomainError::NegativeStock);
    }

    #[test]
    fn test_new_rejects_blank_sku() {
        let result = Product::new("Mouse", "", price("10"), 0, "");
        assert_eq!(result.unwrap_err(), DomainError::EmptySku);
    }

    #[test]
    fn test_name_is_checked_before_price() {
        let result = Product::new("", "", Decimal::ZERO, -1, "");
        assert_eq!(result.unwrap_err(), DomainError::EmptyName);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut product = keyboard();
        let id = product.id();

        product
            .update("Silent Keyboard", "Quiet switches", price("180.50"), 12, "KB-SIL-002")
            .unwrap();

        assert_eq!(product.id(), id);
        assert_eq!(product.name(), "Silent Keyboard");
        assert_eq!(product.description(), "Quiet switches");
        assert_eq!(product.price(), price("180.50"));
        assert_eq!(product.stock_quantity(), 12);
        assert_eq!(product.sku(), "KB-SIL-002");
    }

    #[test]
    fn test_rejected_update_leaves_product_unchanged() {
        let mut product = keyboard();
        let before = product.clone();

        let result = product.update("New name", "New description", Decimal::ZERO, 3, "KB-NEW-001");

        assert_eq!(result.unwrap_err(), DomainError::NonPositivePrice);
        assert_eq!(product, before);
    }

    #[test]
    fn test_add_stock_increases_quantity() {
        let mut product = keyboard();
        product.add_stock(10).unwrap();
        assert_eq!(product.stock_quantity(), 15);
    }

    #[test]
    fn test_add_stock_rejects_non_positive_quantity() {
        let mut product = keyboard();
        assert_eq!(product.add_stock(0), Err(DomainError::NonPositiveQuantity));
        assert_eq!(product.add_stock(-3), Err(DomainError::NonPositiveQuantity));
        assert_eq!(product.stock_quantity(), 5);
    }

    #[test]
    fn test_add_stock_overflow_is_rejected() {
        let mut product = Product::new("Cable", "", price("1"), i32::MAX, "SKU-CABLE").unwrap();
        assert_eq!(product.add_stock(1), Err(DomainError::StockOverflow));
        assert_eq!(product.stock_quantity(), i32::MAX);
    }

    #[test]
    fn test_remove_stock_decreases_quantity() {
        let mut product = keyboard();
        product.remove_stock(5).unwrap();
        assert_eq!(product.stock_quantity(), 0);
    }

    #[test]
    fn test_remove_stock_more_than_available_fails() {
        let mut product = keyboard();

        let err = product.remove_stock(6).unwrap_err();

        assert_eq!(err, DomainError::InsufficientStock);
        assert_eq!(err.to_string(), "Insufficient stock.");
        assert_eq!(product.stock_quantity(), 5);
    }

    #[test]
    fn test_remove_stock_rejects_non_positive_quantity() {
        let mut product = keyboard();
        assert_eq!(product.remove_stock(0), Err(DomainError::NonPositiveQuantity));
        assert_eq!(product.stock_quantity(), 5);
    }

    #[test]
    fn test_domain_error_messages() {
        assert_eq!(DomainError::EmptyName.to_string(), "Name cannot be empty.");
        assert_eq!(
            DomainError::NonPositivePrice.to_string(),
            "Price must be greater than zero."
        );
        assert_eq!(
            DomainError::PriceTooPrecise.to_string(),
            "Price must have at most 2 decimal places."
        );
        assert_eq!(
            DomainError::NegativeStock.to_string(),
            "Stock quantity cannot be negative."
        );
        assert_eq!(DomainError::EmptySku.to_string(), "SKU cannot be empty.");
        assert_eq!(
            DomainError::NonPositiveQuantity.to_string(),
            "Quantity must be positive."
        );
    }
}
