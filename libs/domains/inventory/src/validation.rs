//! Request validation.
//!
//! Rules are declared on the DTOs with `validator` derives; this module holds
//! the custom rule functions and flattens `ValidationErrors` into
//! [`FieldErrors`] keyed by the public field name (`Name`, `StockQuantity`, ...).

use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{FieldErrors, ProductError, ProductResult};
use crate::models::MAX_PAGE_SIZE;
use crate::product::PRICE_SCALE;

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_name_required(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(rule("required", "Name is required."));
    }
    Ok(())
}

pub(crate) fn validate_sku_required(sku: &str) -> Result<(), ValidationError> {
    if sku.trim().is_empty() {
        return Err(rule("required", "SKU is required."));
    }
    Ok(())
}

pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(rule("range", "Price must be greater than zero."));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(rule("scale", "Price must have at most 2 decimal places."));
    }
    Ok(())
}

pub(crate) fn validate_page_size(page_size: i32) -> Result<(), ValidationError> {
    if page_size < 1 {
        return Err(rule("range", "Page size must be at least 1."));
    }
    if page_size > MAX_PAGE_SIZE {
        return Err(rule("range", "Page size must not exceed 50."));
    }
    Ok(())
}

/// Run the derived rules of `input`, mapping failures to [`ProductError::Validation`].
pub fn validate_request<T: Validate>(input: &T) -> ProductResult<()> {
    input
        .validate()
        .map_err(|errors| ProductError::Validation(field_errors(&errors)))
}

/// Flatten `validator` output into field name → messages.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut result = FieldErrors::new();

    for (field, failures) in errors.field_errors() {
        let messages = result.entry(pascal_case(&field)).or_default();
        for failure in failures {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid.", pascal_case(&field)));
            messages.push(message);
        }
    }

    result
}

fn pascal_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
