//! # Validation Module
//!
//! The stock and non-empty checks shared by the cart and the order processor.
//!
//! ## Validation Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Run                                   │
//! │                                                                         │
//! │  Cart::add(product)                                                     │
//! │  └── validate_in_stock ──► reject the add, cart unchanged               │
//! │                                                                         │
//! │  OrderProcessor::checkout(customer, products)                          │
//! │  ├── validate_not_empty ──► "No products selected."                     │
//! │  └── validate_all_in_stock ──► first failing product only              │
//! │                                                                         │
//! │  Nothing else is validated: prices, names and rates are trusted.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Limitation
//! The cart checks stock when an item is added and never again. A product
//! snapshot sitting in a cart keeps the stock it had when it was added.

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a product has at least one unit on hand.
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::types::Product;
/// use checkout_core::validation::validate_in_stock;
///
/// let book = Product::new(5, "Book", Money::from_cents(1999), "Books", 15);
/// assert!(validate_in_stock(&book).is_ok());
///
/// let gone = Product::new(6, "Lamp", Money::from_cents(4500), "Home", 0);
/// assert!(validate_in_stock(&gone).is_err());
/// ```
pub fn validate_in_stock(product: &Product) -> ValidationResult<()> {
    if !product.in_stock() {
        return Err(ValidationError::OutOfStock {
            product_id: product.id,
            name: product.name.clone(),
        });
    }

    Ok(())
}

/// Validates that an order has at least one product.
pub fn validate_not_empty(products: &[Product]) -> ValidationResult<()> {
    if products.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }

    Ok(())
}

/// Validates every product's stock, stopping at the first failure.
pub fn validate_all_in_stock(products: &[Product]) -> ValidationResult<()> {
    products.iter().try_for_each(validate_in_stock)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, name: &str, stock: i64) -> Product {
        Product::new(id, name, Money::from_cents(100), "Test", stock)
    }

    #[test]
    fn test_validate_in_stock() {
        assert!(validate_in_stock(&product(1, "A", 1)).is_ok());
        assert!(validate_in_stock(&product(1, "A", 0)).is_err());
        assert!(validate_in_stock(&product(1, "A", -3)).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert_eq!(validate_not_empty(&[]), Err(ValidationError::EmptyOrder));
        assert!(validate_not_empty(&[product(1, "A", 1)]).is_ok());
    }

    #[test]
    fn test_validate_all_in_stock_reports_first_failure() {
        let products = [
            product(1, "A", 2),
            product(2, "B", 0),
            product(3, "C", 0),
        ];
        assert_eq!(
            validate_all_in_stock(&products),
            Err(ValidationError::OutOfStock {
                product_id: 2,
                name: "B".to_string(),
            })
        );
    }
}
