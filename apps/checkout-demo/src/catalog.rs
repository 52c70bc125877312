//! Sample products and customers for the walkthrough.

use checkout_core::{Customer, CustomerTier, Money, Product};

/// (id, name, price in cents, category, stock)
const PRODUCTS: &[(u32, &str, i64, &str, i64)] = &[
    (1, "Laptop", 99999, "Electronics", 5),
    (2, "Mouse", 2550, "Electronics", 10),
    (3, "Keyboard", 7500, "Electronics", 8),
    (4, "Monitor", 29999, "Electronics", 3),
    (5, "Book", 1999, "Books", 15),
];

/// The product catalog, in listing order.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, cents, category, stock)| {
            Product::new(id, name, Money::from_cents(cents), category, stock)
        })
        .collect()
}

/// One customer per tier: Regular, Premium, VIP.
pub fn customers() -> [Customer; 3] {
    [
        Customer::new(1, "John Doe", "john@email.com", CustomerTier::Regular),
        Customer::new(2, "Jane Smith", "jane@email.com", CustomerTier::Premium),
        Customer::new(3, "Bob Wilson", "bob@email.com", CustomerTier::Vip),
    ]
}
