//! # Domain Types
//!
//! Core domain types used throughout the checkout flow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │  CustomerTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  Regular        │       │
//! │  │  name           │   │  name           │   │  Premium        │       │
//! │  │  price (Money)  │   │  email          │   │  Vip            │       │
//! │  │  category       │   │  tier ──────────┼──►│                 │       │
//! │  │  stock_quantity │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are set once at construction and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: u32,

    /// Display name shown in the cart and order report.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Free-form category ("Electronics", "Books").
    pub category: String,

    /// Units on hand at the time this value was created.
    pub stock_quantity: i64,
}

impl Product {
    /// Creates a product.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock_quantity: i64,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            category: category.into(),
            stock_quantity,
        }
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Checks if at least one unit is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

// =============================================================================
// Customer Tier
// =============================================================================

/// Customer classification that decides the default discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    /// No discount.
    Regular,
    /// 10% off.
    Premium,
    /// 20% off.
    Vip,
}

impl Default for CustomerTier {
    fn default() -> Self {
        CustomerTier::Regular
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CustomerTier::Regular => "Regular",
            CustomerTier::Premium => "Premium",
            CustomerTier::Vip => "VIP",
        };
        f.write_str(name)
    }
}

/// Parses tier names case-insensitively ("vip", "VIP", "Premium").
impl FromStr for CustomerTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(CustomerTier::Regular),
            "premium" => Ok(CustomerTier::Premium),
            "vip" => Ok(CustomerTier::Vip),
            _ => Err(CoreError::UnknownTier(s.to_string())),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub tier: CustomerTier,
}

impl Customer {
    /// Creates a customer.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        tier: CustomerTier,
    ) -> Self {
        Customer {
            id,
            name: name.into(),
            email: email.into(),
            tier,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_in_stock() {
        let laptop = Product::new(1, "Laptop", Money::from_cents(99999), "Electronics", 5);
        assert!(laptop.in_stock());
        assert_eq!(laptop.price(), Money::from_cents(99999));

        let sold_out = Product::new(2, "Mouse", Money::from_cents(2550), "Electronics", 0);
        assert!(!sold_out.in_stock());
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("VIP".parse::<CustomerTier>(), Ok(CustomerTier::Vip));
        assert_eq!(" premium ".parse::<CustomerTier>(), Ok(CustomerTier::Premium));
        assert_eq!("Regular".parse::<CustomerTier>(), Ok(CustomerTier::Regular));
        assert_eq!(
            "gold".parse::<CustomerTier>(),
            Err(CoreError::UnknownTier("gold".to_string()))
        );
    }

    #[test]
    fn test_tier_display_round_trips_through_from_str() {
        for tier in [CustomerTier::Regular, CustomerTier::Premium, CustomerTier::Vip] {
            assert_eq!(tier.to_string().parse::<CustomerTier>(), Ok(tier));
        }
    }

    #[test]
    fn test_tier_serde_is_snake_case() {
        let json = serde_json::to_string(&CustomerTier::Vip).unwrap();
        assert_eq!(json, "\"vip\"");

        let tier: CustomerTier = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(tier, CustomerTier::Premium);
    }

    #[test]
    fn test_tier_default() {
        assert_eq!(CustomerTier::default(), CustomerTier::Regular);
    }
}
