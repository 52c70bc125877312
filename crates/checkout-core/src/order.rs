//! # Order Processing
//!
//! Validates an order, asks the injected discount strategy for a discount,
//! and reports the totals.
//!
//! ## Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process_order(customer, products)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products empty? ──yes──► "No products selected."        ──► false     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  first product with stock <= 0? ──yes──► "{name} is out of stock."     │
//! │       │                                                 ──► false     │
//! │       ▼                                                                 │
//! │  total    = Σ price                                                     │
//! │  discount = strategy.calculate_discount(customer, total)               │
//! │  final    = total - discount                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  report name / total / discount / final                  ──► true      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The processor never branches on which strategy it holds. Swapping the
//! strategy changes the discount and final amount, never the outcome.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::discount::DiscountStrategy;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::report::{Reporter, TracingReporter};
use crate::types::{Customer, CustomerTier, Product};
use crate::validation::{validate_all_in_stock, validate_not_empty};

// =============================================================================
// Order Summary
// =============================================================================

/// The computed result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub customer_name: String,
    pub tier: CustomerTier,
    pub item_count: usize,
    /// Sum of item prices.
    pub total: Money,
    /// Amount returned by the strategy.
    pub discount: Money,
    /// `total - discount`, unrounded.
    pub final_amount: Money,
    /// Description of the strategy that produced the discount.
    pub strategy: String,
    pub processed_at: DateTime<Utc>,
}

// =============================================================================
// Order Processor
// =============================================================================

/// Checks out orders with one fixed discount strategy.
pub struct OrderProcessor {
    strategy: Box<dyn DiscountStrategy>,
    reporter: Arc<dyn Reporter>,
}

impl fmt::Debug for OrderProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderProcessor")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl OrderProcessor {
    /// Creates a processor that reports through `tracing`.
    pub fn new(strategy: Box<dyn DiscountStrategy>) -> Self {
        Self::with_reporter(strategy, Arc::new(TracingReporter))
    }

    /// Creates a processor with an explicit report sink.
    pub fn with_reporter(strategy: Box<dyn DiscountStrategy>, reporter: Arc<dyn Reporter>) -> Self {
        OrderProcessor { strategy, reporter }
    }

    /// The injected strategy.
    pub fn strategy(&self) -> &dyn DiscountStrategy {
        self.strategy.as_ref()
    }

    /// Validates and prices an order without reporting anything.
    ///
    /// ## Errors
    /// - `ValidationError::EmptyOrder` if `products` is empty
    /// - `ValidationError::OutOfStock` for the first product with no stock
    pub fn checkout(&self, customer: &Customer, products: &[Product]) -> CoreResult<OrderSummary> {
        validate_not_empty(products)?;
        validate_all_in_stock(products)?;

        let total: Money = products.iter().map(Product::price).sum();
        let discount = self.strategy.calculate_discount(customer, total);
        let final_amount = total - discount;

        debug!(
            customer_id = customer.id,
            strategy = %self.strategy.description(),
            total = %total.amount(),
            discount = %discount.amount(),
            "Priced order"
        );

        Ok(OrderSummary {
            customer_name: customer.name.clone(),
            tier: customer.tier,
            item_count: products.len(),
            total,
            discount,
            final_amount,
            strategy: self.strategy.description(),
            processed_at: Utc::now(),
        })
    }

    /// Processes an order and reports the outcome.
    ///
    /// Returns `true` if the order went through. On failure a single
    /// "Cannot process order: ..." line is reported and nothing else.
    pub fn process_order(&self, customer: &Customer, products: &[Product]) -> bool {
        match self.checkout(customer, products) {
            Ok(summary) => {
                info!(
                    customer_id = customer.id,
                    items = summary.item_count,
                    final_amount = %summary.final_amount.amount(),
                    "Order processed"
                );
                self.report_summary(&summary);
                true
            }
            Err(e) => {
                warn!(customer_id = customer.id, error = %e, "Order rejected");
                let reason = match e {
                    CoreError::Validation(v) => v.to_string(),
                    other => other.to_string(),
                };
                self.reporter
                    .line(&format!("Cannot process order: {}", reason));
                false
            }
        }
    }

    fn report_summary(&self, summary: &OrderSummary) {
        self.reporter
            .line(&format!("Order processed for {}:", summary.customer_name));
        self.reporter.line(&format!("Total: {}", summary.total));
        self.reporter.line(&format!("Discount: {}", summary.discount));
        self.reporter
            .line(&format!("Final Amount: {}", summary.final_amount));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{
        select, PremiumDiscount, RegularDiscount, SeasonalDiscount, VipDiscount,
    };
    use crate::error::ValidationError;
    use crate::money::Rate;
    use crate::report::MemoryReporter;
    use rust_decimal_macros::dec;

    fn vip() -> Customer {
        Customer::new(3, "Bob Wilson", "bob@email.com", CustomerTier::Vip)
    }

    fn sample_order() -> Vec<Product> {
        vec![
            Product::new(1, "Laptop", Money::new(dec!(999.99)), "Electronics", 5),
            Product::new(2, "Mouse", Money::new(dec!(25.50)), "Electronics", 10),
            Product::new(3, "Keyboard", Money::new(dec!(75.00)), "Electronics", 8),
        ]
    }

    fn processor_with(strategy: Box<dyn DiscountStrategy>) -> (OrderProcessor, Arc<MemoryReporter>) {
        let reporter = Arc::new(MemoryReporter::new());
        let processor = OrderProcessor::with_reporter(strategy, reporter.clone());
        (processor, reporter)
    }

    #[test]
    fn test_vip_sample_order_is_exact() {
        let (processor, _) = processor_with(VipDiscount.boxed());
        let summary = processor.checkout(&vip(), &sample_order()).unwrap();

        assert_eq!(summary.total.amount(), dec!(1100.49));
        assert_eq!(summary.discount.amount(), dec!(220.098));
        assert_eq!(summary.final_amount.amount(), dec!(880.392));
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.tier, CustomerTier::Vip);
        assert_eq!(summary.strategy, "VIP (20%)");
    }

    #[test]
    fn test_process_order_reports_totals() {
        let (processor, reporter) = processor_with(VipDiscount.boxed());
        assert!(processor.process_order(&vip(), &sample_order()));
        assert_eq!(
            reporter.lines(),
            vec![
                "Order processed for Bob Wilson:",
                "Total: $1100.49",
                "Discount: $220.10",
                "Final Amount: $880.39",
            ]
        );
    }

    #[test]
    fn test_empty_order_fails_without_totals() {
        let (processor, reporter) = processor_with(VipDiscount.boxed());
        assert!(!processor.process_order(&vip(), &[]));
        assert_eq!(
            reporter.lines(),
            vec!["Cannot process order: No products selected."]
        );
        assert_eq!(
            processor.checkout(&vip(), &[]),
            Err(CoreError::Validation(ValidationError::EmptyOrder))
        );
    }

    #[test]
    fn test_out_of_stock_short_circuits_on_first_item() {
        let (processor, reporter) = processor_with(PremiumDiscount.boxed());
        let mut products = sample_order();
        products[1].stock_quantity = 0;
        products[2].stock_quantity = 0;

        assert!(!processor.process_order(&vip(), &products));
        assert_eq!(
            reporter.lines(),
            vec!["Cannot process order: Mouse is out of stock."]
        );
    }

    #[test]
    fn test_single_out_of_stock_product_fails() {
        let (processor, _) = processor_with(RegularDiscount.boxed());
        let monitor = Product::new(4, "Monitor", Money::new(dec!(299.99)), "Electronics", 0);
        assert!(!processor.process_order(&vip(), &[monitor]));
    }

    #[test]
    fn test_swapping_strategy_only_changes_amounts() {
        let customer = vip();
        let good = sample_order();
        let mut bad = sample_order();
        bad[0].stock_quantity = 0;

        let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
            RegularDiscount.boxed(),
            PremiumDiscount.boxed(),
            VipDiscount.boxed(),
            SeasonalDiscount::new(VipDiscount.boxed(), Rate::from_bps(1500)).boxed(),
        ];

        let mut discounts = Vec::new();
        for strategy in strategies {
            let (processor, _) = processor_with(strategy);
            assert!(processor.process_order(&customer, &good));
            assert!(!processor.process_order(&customer, &bad));
            assert!(!processor.process_order(&customer, &[]));

            let summary = processor.checkout(&customer, &good).unwrap();
            assert_eq!(summary.total.amount(), dec!(1100.49));
            assert_eq!(summary.final_amount, summary.total - summary.discount);
            discounts.push(summary.discount.amount());
        }

        assert_eq!(
            discounts,
            vec![dec!(0), dec!(110.049), dec!(220.098), dec!(385.1715)]
        );
    }

    #[test]
    fn test_selected_strategy_per_tier() {
        let products = sample_order();
        let cases = [
            (CustomerTier::Regular, dec!(1100.49)),
            (CustomerTier::Premium, dec!(990.441)),
            (CustomerTier::Vip, dec!(880.392)),
        ];
        for (tier, expected_final) in cases {
            let customer = Customer::new(1, "Someone", "someone@email.com", tier);
            let (processor, _) = processor_with(select(tier));
            let summary = processor.checkout(&customer, &products).unwrap();
            assert_eq!(summary.final_amount.amount(), expected_final);
        }
    }

    #[test]
    fn test_summary_serializes() {
        let (processor, _) = processor_with(VipDiscount.boxed());
        let summary = processor.checkout(&vip(), &sample_order()).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["customer_name"], "Bob Wilson");
        assert_eq!(json["tier"], "vip");
        assert_eq!(json["item_count"], 3);
    }
}
