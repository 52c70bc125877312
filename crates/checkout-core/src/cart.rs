//! # Cart
//!
//! An ordered list of product snapshots waiting to be checked out.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add(product) ──────► stock > 0? ──yes──► items.push(product)          │
//! │                            │                                            │
//! │                            no ──► Err(OutOfStock), cart unchanged       │
//! │                                                                         │
//! │  remove(id) ────────► first item with that id is removed (or nothing)  │
//! │                                                                         │
//! │  items() ───────────► copy of the list                                 │
//! │                                                                         │
//! │  total() ───────────► sum of prices                                    │
//! │                                                                         │
//! │  clear() ───────────► items.clear(), created_at reset                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshots
//! Products are cloned into the cart when added. Stock is checked at that
//! moment only; if the catalog's stock changes later the cart still holds
//! the old snapshot.
//!
//! The cart has no locking. One owner, one thread.
//!
//! ## Serialization
//! A deserialized cart goes through the same stock check as `add`, so a
//! payload holding an out-of-stock item is rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::money::Money;
use crate::report::Reporter;
use crate::types::Product;
use crate::error::ValidationError;
use crate::validation::{validate_all_in_stock, validate_in_stock, ValidationResult};

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved
/// - The same product may appear more than once (one entry per add)
/// - Every item had stock > 0 when it was added
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCart")]
pub struct Cart {
    items: Vec<Product>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

/// Wire shape of a cart before its items are stock-checked.
#[derive(Deserialize)]
struct UncheckedCart {
    items: Vec<Product>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UncheckedCart> for Cart {
    type Error = ValidationError;

    fn try_from(raw: UncheckedCart) -> Result<Self, Self::Error> {
        validate_all_in_stock(&raw.items)?;
        Ok(Cart {
            items: raw.items,
            created_at: raw.created_at,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the end of the cart.
    ///
    /// ## Returns
    /// - `Ok(())` if the product had stock and was appended
    /// - `Err(ValidationError::OutOfStock)` otherwise; the cart is unchanged
    ///
    /// The product's stock is not decremented.
    pub fn add(&mut self, product: Product) -> ValidationResult<()> {
        if let Err(e) = validate_in_stock(&product) {
            warn!(product_id = product.id, name = %product.name, "Cannot add to cart: out of stock");
            return Err(e);
        }

        info!(product_id = product.id, name = %product.name, "Added to cart");
        self.items.push(product);
        Ok(())
    }

    /// Removes the first item with the given product ID.
    ///
    /// Returns the removed product, or `None` if nothing matched.
    pub fn remove(&mut self, product_id: u32) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == product_id)?;
        let removed = self.items.remove(index);
        info!(product_id, name = %removed.name, "Removed from cart");
        Some(removed)
    }

    /// Like [`Cart::remove`], also reporting "Removed {name} from cart."
    /// when something was removed.
    pub fn remove_with_report(
        &mut self,
        product_id: u32,
        reporter: &dyn Reporter,
    ) -> Option<Product> {
        let removed = self.remove(product_id)?;
        reporter.line(&format!("Removed {} from cart.", removed.name));
        Some(removed)
    }

    /// Returns a copy of the current items, in insertion order.
    pub fn items(&self) -> Vec<Product> {
        self.items.clone()
    }

    /// Sum of item prices. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
        info!("Cart cleared");
    }

    /// Like [`Cart::clear`], also reporting "Cart cleared.".
    pub fn clear_with_report(&mut self, reporter: &dyn Reporter) {
        self.clear();
        reporter.line("Cart cleared.");
    }

    /// Number of entries (duplicates counted separately).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Writes the cart contents to a reporter.
    ///
    /// ```text
    /// Shopping Cart:
    /// - Laptop: $999.99
    /// - Mouse: $25.50
    /// Total: $1025.49
    /// ```
    pub fn report(&self, reporter: &dyn Reporter) {
        if self.is_empty() {
            reporter.line("Your cart is empty.");
            return;
        }

        reporter.line("Shopping Cart:");
        for item in &self.items {
            reporter.line(&format!("- {}: {}", item.name, item.price));
        }
        reporter.line(&format!("Total: {}", self.total()));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
