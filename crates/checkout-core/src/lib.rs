//! # checkout-core: Pure Business Logic for the Checkout Flow
//!
//! Products, customers, a cart, swappable discount strategies, and an order
//! processor that ties them together. No I/O: report lines go through the
//! [`report::Reporter`] trait and logging goes through the `tracing` facade.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-demo (binary)                       │   │
//! │  │    config ──► catalog ──► walkthrough ──► StdoutReporter        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ discount  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Strategy  │  │   │
//! │  │   │ Customer  │  │   Rate    │  │           │  │ Selector  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   order   │  │validation │  │  report   │                  │   │
//! │  │   │ Processor │  │  stock    │  │ Reporter  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, CustomerTier)
//! - [`money`] - Exact decimal Money and discount Rate
//! - [`discount`] - Discount strategies and the tier selector
//! - [`cart`] - Shopping cart
//! - [`order`] - Order processor
//! - [`report`] - Report sinks
//! - [`validation`] - Stock and empty-order checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::discount::select;
//! use checkout_core::{Cart, Customer, CustomerTier, Money, OrderProcessor, Product};
//!
//! let mut cart = Cart::new();
//! cart.add(Product::new(1, "Laptop", Money::from_cents(99999), "Electronics", 5)).unwrap();
//! cart.add(Product::new(2, "Mouse", Money::from_cents(2550), "Electronics", 10)).unwrap();
//!
//! let jane = Customer::new(2, "Jane Smith", "jane@email.com", CustomerTier::Premium);
//! let processor = OrderProcessor::new(select(jane.tier));
//!
//! let summary = processor.checkout(&jane, &cart.items()).unwrap();
//! assert_eq!(summary.total, Money::from_cents(102549));
//! assert!(processor.process_order(&jane, &cart.items()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use cart::Cart;
pub use discount::DiscountStrategy;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Rate};
pub use order::{OrderProcessor, OrderSummary};
pub use report::Reporter;
pub use types::*;
