//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Order/cart checks (empty order, out of stock)  │
//! │                                                                         │
//! │  checkout-demo errors (app)                                            │
//! │  └── ConfigError      - Config file / environment problems             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → report line / `false`             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, ID, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable. Nothing here is allowed to panic.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A customer tier name could not be parsed.
    ///
    /// ## When This Occurs
    /// - Tier names coming from config files or user input
    /// - The discount selector catches this and falls back to the
    ///   regular strategy, so it never reaches the order flow
    #[error("Unknown customer tier: {0}")]
    UnknownTier(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Order and cart validation failures.
///
/// These are the only two conditions that can stop a checkout. Both are
/// reported to the caller and leave no partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The order has no products.
    #[error("No products selected.")]
    EmptyOrder,

    /// A product has no stock left.
    ///
    /// ## User Workflow
    /// ```text
    /// Add "Laptop" to cart
    ///      │
    ///      ▼
    /// Check stock: stock_quantity = 0
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 1, name: "Laptop" }
    ///      │
    ///      ▼
    /// Report: "Laptop is out of stock."
    /// ```
    #[error("{name} is out of stock.")]
    OutOfStock { product_id: u32, name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::OutOfStock {
            product_id: 4,
            name: "Monitor".to_string(),
        };
        assert_eq!(err.to_string(), "Monitor is out of stock.");
        assert_eq!(ValidationError::EmptyOrder.to_string(), "No products selected.");
    }

    #[test]
    fn test_unknown_tier_message() {
        let err = CoreError::UnknownTier("gold".to_string());
        assert_eq!(err.to_string(), "Unknown customer tier: gold");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyOrder.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::EmptyOrder)
        ));
    }
}
