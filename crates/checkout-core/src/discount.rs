//! # Discount Strategies
//!
//! Every discount rule is a [`DiscountStrategy`]. The order processor holds
//! one and never looks at which one it is.
//!
//! ## Strategy Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Discount Strategies                                │
//! │                                                                         │
//! │  RegularDiscount      0                                                 │
//! │  PremiumDiscount      total × 0.10                                      │
//! │  VipDiscount          total × 0.20                                      │
//! │  SeasonalDiscount     inner(customer, total) + total × rate             │
//! │                         │                                               │
//! │                         └──► wraps ANY strategy, including another      │
//! │                              SeasonalDiscount                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Substitutability Rules
//! - No strategy fails, panics, or rejects an input another would accept
//! - No strategy mutates the customer or the total (both are borrowed/copied)
//! - For a non-negative total, every discount is non-negative
//!
//! ## Usage
//! ```rust
//! use checkout_core::discount::{select, DiscountStrategy, SeasonalDiscount, VipDiscount};
//! use checkout_core::money::{Money, Rate};
//! use checkout_core::types::{Customer, CustomerTier};
//!
//! let bob = Customer::new(3, "Bob Wilson", "bob@email.com", CustomerTier::Vip);
//! let total = Money::from_cents(100000); // $1000.00
//!
//! let holiday = SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(1500));
//! assert_eq!(holiday.calculate_discount(&bob, total), Money::from_cents(35000));
//!
//! let by_tier = select(bob.tier);
//! assert_eq!(by_tier.calculate_discount(&bob, total), Money::from_cents(20000));
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::money::{Money, Rate};
use crate::types::{Customer, CustomerTier};

/// Premium tier rate: 10%.
pub const PREMIUM_RATE_BPS: u32 = 1000;

/// VIP tier rate: 20%.
pub const VIP_RATE_BPS: u32 = 2000;

// =============================================================================
// Strategy Trait
// =============================================================================

/// Computes a discount amount for a customer's order total.
pub trait DiscountStrategy: Send + Sync + fmt::Debug {
    /// Returns the amount to take off `total`.
    fn calculate_discount(&self, customer: &Customer, total: Money) -> Money;

    /// Human-readable label, e.g. `"VIP (20%)"`.
    fn description(&self) -> String;

    /// Moves this strategy into a box, for wrapping or injection.
    fn boxed(self) -> Box<dyn DiscountStrategy>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl DiscountStrategy for Box<dyn DiscountStrategy> {
    fn calculate_discount(&self, customer: &Customer, total: Money) -> Money {
        (**self).calculate_discount(customer, total)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn boxed(self) -> Box<dyn DiscountStrategy> {
        self
    }
}

// =============================================================================
// Tier Strategies
// =============================================================================

/// Regular customers get no discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularDiscount;

impl DiscountStrategy for RegularDiscount {
    fn calculate_discount(&self, _customer: &Customer, _total: Money) -> Money {
        Money::zero()
    }

    fn description(&self) -> String {
        "Regular (no discount)".to_string()
    }
}

/// Premium customers get 10% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumDiscount;

impl DiscountStrategy for PremiumDiscount {
    fn calculate_discount(&self, _customer: &Customer, total: Money) -> Money {
        total * Rate::from_bps(PREMIUM_RATE_BPS)
    }

    fn description(&self) -> String {
        format!("Premium ({})", Rate::from_bps(PREMIUM_RATE_BPS))
    }
}

/// VIP customers get 20% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct VipDiscount;

impl DiscountStrategy for VipDiscount {
    fn calculate_discount(&self, _customer: &Customer, total: Money) -> Money {
        total * Rate::from_bps(VIP_RATE_BPS)
    }

    fn description(&self) -> String {
        format!("VIP ({})", Rate::from_bps(VIP_RATE_BPS))
    }
}

// =============================================================================
// Seasonal Decorator
// =============================================================================

/// Adds a seasonal percentage on top of another strategy.
///
/// ## Stacking
/// ```text
/// SeasonalDiscount(+5%)
///   └── SeasonalDiscount(+10%)
///         └── VipDiscount (20%)
///
/// discount = total × 0.20 + total × 0.10 + total × 0.05
/// ```
#[derive(Debug)]
pub struct SeasonalDiscount {
    inner: Box<dyn DiscountStrategy>,
    rate: Rate,
}

impl SeasonalDiscount {
    /// Wraps `inner`, adding `rate × total` to whatever it returns.
    pub fn new(inner: Box<dyn DiscountStrategy>, rate: Rate) -> Self {
        SeasonalDiscount { inner, rate }
    }

    /// The extra rate this layer contributes.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The wrapped strategy.
    pub fn inner(&self) -> &dyn DiscountStrategy {
        self.inner.as_ref()
    }
}

impl DiscountStrategy for SeasonalDiscount {
    fn calculate_discount(&self, customer: &Customer, total: Money) -> Money {
        let base = self.inner.calculate_discount(customer, total);
        let seasonal = total * self.rate;
        debug!(
            base = %base,
            seasonal = %seasonal,
            rate = %self.rate,
            "Applied seasonal discount"
        );
        base + seasonal
    }

    fn description(&self) -> String {
        format!("Seasonal +{} over {}", self.rate, self.inner.description())
    }
}

// =============================================================================
// Selector
// =============================================================================

/// Returns a fresh default strategy for a customer tier.
///
/// | Tier    | Strategy          |
/// |---------|-------------------|
/// | Regular | `RegularDiscount` |
/// | Premium | `PremiumDiscount` |
/// | Vip     | `VipDiscount`     |
pub fn select(tier: CustomerTier) -> Box<dyn DiscountStrategy> {
    match tier {
        CustomerTier::Regular => RegularDiscount.boxed(),
        CustomerTier::Premium => PremiumDiscount.boxed(),
        CustomerTier::Vip => VipDiscount.boxed(),
    }
}

/// Returns the default strategy for a tier given by name.
///
/// Unrecognized names get `RegularDiscount`. This never fails.
///
/// ## Example
/// ```rust
/// use checkout_core::discount::select_by_name;
///
/// assert_eq!(select_by_name("premium").description(), "Premium (10%)");
/// assert_eq!(select_by_name("platinum").description(), "Regular (no discount)");
/// ```
pub fn select_by_name(name: &str) -> Box<dyn DiscountStrategy> {
    match name.parse::<CustomerTier>() {
        Ok(tier) => select(tier),
        Err(e) => {
            warn!(tier = name, error = %e, "Falling back to regular discount");
            RegularDiscount.boxed()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn customer(tier: CustomerTier) -> Customer {
        Customer::new(1, "Test Customer", "test@email.com", tier)
    }

    fn all_strategies() -> Vec<Box<dyn DiscountStrategy>> {
        vec![
            RegularDiscount.boxed(),
            PremiumDiscount.boxed(),
            VipDiscount.boxed(),
            SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(500)).boxed(),
            SeasonalDiscount::new(RegularDiscount.boxed(), Rate::from_bps(1500)).boxed(),
        ]
    }

    #[test]
    fn test_tier_rates() {
        let c = customer(CustomerTier::Vip);
        let total = Money::new(dec!(1000));

        assert_eq!(RegularDiscount.calculate_discount(&c, total), Money::zero());
        assert_eq!(PremiumDiscount.calculate_discount(&c, total), Money::new(dec!(100)));
        assert_eq!(VipDiscount.calculate_discount(&c, total), Money::new(dec!(200)));
    }

    #[test]
    fn test_discount_ignores_customer_tier() {
        // The strategy decides, not the customer's tier field.
        let total = Money::new(dec!(50));
        for tier in [CustomerTier::Regular, CustomerTier::Premium, CustomerTier::Vip] {
            assert_eq!(
                VipDiscount.calculate_discount(&customer(tier), total),
                Money::new(dec!(10))
            );
        }
    }

    #[test]
    fn test_bounds_hold_for_every_total() {
        let c = customer(CustomerTier::Regular);
        for amount in [dec!(0), dec!(0.01), dec!(19.99), dec!(1100.49), dec!(123456.78)] {
            let total = Money::new(amount);
            assert!(RegularDiscount.calculate_discount(&c, total).is_zero());
            assert_eq!(
                PremiumDiscount.calculate_discount(&c, total).amount(),
                amount * dec!(0.10)
            );
            assert_eq!(
                VipDiscount.calculate_discount(&c, total).amount(),
                amount * dec!(0.20)
            );
            for strategy in all_strategies() {
                let discount = strategy.calculate_discount(&c, total);
                assert!(!discount.is_negative(), "{}", strategy.description());
            }
        }
    }

    #[test]
    fn test_seasonal_adds_rate_to_any_inner() {
        let c = customer(CustomerTier::Premium);
        let total = Money::new(dec!(1100.49));
        let rate = Rate::from_fraction(dec!(0.05));

        for inner in all_strategies() {
            let expected = inner.calculate_discount(&c, total) + total * rate;
            let seasonal = SeasonalDiscount::new(inner, rate);
            assert_eq!(seasonal.calculate_discount(&c, total), expected);
        }
    }

    #[test]
    fn test_seasonal_over_vip_on_sample_amount() {
        let c = customer(CustomerTier::Vip);
        let total = Money::new(dec!(1000));

        let five = SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(500));
        assert_eq!(five.calculate_discount(&c, total), Money::new(dec!(250)));

        let fifteen = SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(1500));
        assert_eq!(fifteen.calculate_discount(&c, total), Money::new(dec!(350)));
    }

    #[test]
    fn test_seasonal_nests() {
        let c = customer(CustomerTier::Vip);
        let total = Money::new(dec!(200));
        let stacked = SeasonalDiscount::new(
            SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(1000)).boxed(),
            Rate::from_bps(500),
        );
        // 20% + 10% + 5% of 200
        assert_eq!(stacked.calculate_discount(&c, total), Money::new(dec!(70)));
        assert_eq!(stacked.rate(), Rate::from_bps(500));
        assert_eq!(
            stacked.description(),
            "Seasonal +5% over Seasonal +10% over VIP (20%)"
        );
    }

    #[test]
    fn test_select_matches_tier_table() {
        let c = customer(CustomerTier::Regular);
        let total = Money::new(dec!(1000));

        assert!(select(CustomerTier::Regular).calculate_discount(&c, total).is_zero());
        assert_eq!(
            select(CustomerTier::Premium).calculate_discount(&c, total),
            Money::new(dec!(100))
        );
        assert_eq!(
            select(CustomerTier::Vip).calculate_discount(&c, total),
            Money::new(dec!(200))
        );
    }

    #[test]
    fn test_select_by_name_falls_back_to_regular() {
        let c = customer(CustomerTier::Vip);
        let total = Money::new(dec!(1000));

        assert_eq!(
            select_by_name("VIP").calculate_discount(&c, total),
            Money::new(dec!(200))
        );
        for unknown in ["", "gold", "vip-plus"] {
            assert!(select_by_name(unknown).calculate_discount(&c, total).is_zero());
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(RegularDiscount.description(), "Regular (no discount)");
        assert_eq!(PremiumDiscount.description(), "Premium (10%)");
        assert_eq!(VipDiscount.description(), "VIP (20%)");
        assert_eq!(
            SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(500)).description(),
            "Seasonal +5% over VIP (20%)"
        );
    }
}
