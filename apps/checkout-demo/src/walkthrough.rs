//! # Walkthrough
//!
//! The demo script: fill a cart, preview every discount strategy, then
//! check the same cart out once per customer with a different strategy each
//! time.
//!
//! ```text
//! 1. Cart          add Laptop, Mouse, Keyboard; show cart
//! 2. Strategies    Regular / Premium / VIP / Seasonal over VIP on a fixed amount
//! 3. Substitution  select(tier) per customer, same cart
//! 4. Holiday       Seasonal(+holiday rate) over VIP for the VIP customer
//! ```

use std::sync::Arc;

use tracing::warn;

use checkout_core::discount::{
    select, DiscountStrategy, PremiumDiscount, RegularDiscount, SeasonalDiscount, VipDiscount,
};
use checkout_core::{Cart, Customer, OrderProcessor, Product, Reporter};

use crate::catalog;
use crate::config::DemoConfig;

const RULE_WIDTH: usize = 60;

/// Runs every section in order. Returns how many orders went through.
pub fn run(config: &DemoConfig, reporter: Arc<dyn Reporter>) -> usize {
    let products = catalog::products();
    let [regular, premium, vip] = catalog::customers();

    heading(reporter.as_ref(), "Checkout Walkthrough");
    list_products(reporter.as_ref(), &products);

    let mut cart = Cart::new();
    fill_cart(reporter.as_ref(), &mut cart, &products);
    preview_strategies(reporter.as_ref(), config, &vip);

    let mut processed = 0;
    processed += substitute_strategies(&reporter, &[regular, premium, vip.clone()], &cart);
    processed += holiday_order(&reporter, config, &vip, &cart);

    heading(reporter.as_ref(), "Walkthrough complete");
    processed
}

fn heading(reporter: &dyn Reporter, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    reporter.line("");
    reporter.line(&rule);
    reporter.line(title);
    reporter.line(&rule);
}

fn list_products(reporter: &dyn Reporter, products: &[Product]) {
    reporter.line("Available Products:");
    for product in products {
        reporter.line(&format!(
            "- {}: {} (Stock: {})",
            product.name, product.price, product.stock_quantity
        ));
    }
}

fn fill_cart(reporter: &dyn Reporter, cart: &mut Cart, products: &[Product]) {
    heading(reporter, "1. Cart");

    for product in products.iter().take(3) {
        match cart.add(product.clone()) {
            Ok(()) => reporter.line(&format!("Added {} to cart.", product.name)),
            Err(e) => reporter.line(&format!("Cannot add {}: {}", product.name, e)),
        }
    }
    cart.report(reporter);
}

fn preview_strategies(reporter: &dyn Reporter, config: &DemoConfig, customer: &Customer) {
    heading(reporter, "2. Discount strategies");

    let amount = config.preview_amount();
    let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
        RegularDiscount.boxed(),
        PremiumDiscount.boxed(),
        VipDiscount.boxed(),
        SeasonalDiscount::new(VipDiscount.boxed(), config.seasonal_rate()).boxed(),
    ];

    for strategy in &strategies {
        let discount = strategy.calculate_discount(customer, amount);
        reporter.line(&format!(
            "- {}: {} discount on {}",
            strategy.description(),
            discount,
            amount
        ));
    }
}

fn substitute_strategies(
    reporter: &Arc<dyn Reporter>,
    customers: &[Customer],
    cart: &Cart,
) -> usize {
    heading(reporter.as_ref(), "3. Substituting strategies");

    let items = cart.items();
    let mut processed = 0;
    for customer in customers {
        reporter.line(&format!(
            "--- Processing order for {} ({} customer) ---",
            customer.name, customer.tier
        ));
        let processor = OrderProcessor::with_reporter(select(customer.tier), reporter.clone());
        if place(&processor, customer, &items) {
            processed += 1;
        }
    }
    processed
}

fn holiday_order(
    reporter: &Arc<dyn Reporter>,
    config: &DemoConfig,
    customer: &Customer,
    cart: &Cart,
) -> usize {
    heading(reporter.as_ref(), "4. Holiday special");

    let holiday = SeasonalDiscount::new(VipDiscount.boxed(), config.holiday_rate());
    reporter.line(&format!("Strategy: {}", holiday.description()));

    let processor = OrderProcessor::with_reporter(holiday.boxed(), reporter.clone());
    usize::from(place(&processor, customer, &cart.items()))
}

fn place(processor: &OrderProcessor, customer: &Customer, items: &[Product]) -> bool {
    let ok = processor.process_order(customer, items);
    if !ok {
        warn!(customer = %customer.name, "Walkthrough order was rejected");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::report::MemoryReporter;

    fn run_with_memory(config: &DemoConfig) -> (usize, Vec<String>) {
        let reporter = Arc::new(MemoryReporter::new());
        let processed = run(config, reporter.clone());
        (processed, reporter.lines())
    }

    #[test]
    fn test_every_order_goes_through() {
        let (processed, _) = run_with_memory(&DemoConfig::default());
        assert_eq!(processed, 4);
    }

    #[test]
    fn test_cart_section_lists_three_items() {
        let (_, lines) = run_with_memory(&DemoConfig::default());
        let start = lines.iter().position(|l| l == "Shopping Cart:").unwrap();
        assert_eq!(
            &lines[start..start + 5],
            &[
                "Shopping Cart:",
                "- Laptop: $999.99",
                "- Mouse: $25.50",
                "- Keyboard: $75.00",
                "Total: $1100.49",
            ]
        );
    }

    #[test]
    fn test_strategy_preview_uses_config() {
        let (_, lines) = run_with_memory(&DemoConfig::default());
        assert!(lines.contains(&"- VIP (20%): $200.00 discount on $1000.00".to_string()));
        assert!(lines
            .contains(&"- Seasonal +5% over VIP (20%): $250.00 discount on $1000.00".to_string()));
    }

    #[test]
    fn test_vip_orders_report_expected_amounts() {
        let (_, lines) = run_with_memory(&DemoConfig::default());
        // VIP via selector, then holiday (20% + 15%)
        assert!(lines.contains(&"Final Amount: $880.39".to_string()));
        assert!(lines.contains(&"Discount: $385.17".to_string()));
        assert!(lines.contains(&"Final Amount: $715.32".to_string()));
    }
}
