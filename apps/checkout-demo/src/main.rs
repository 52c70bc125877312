//! # Checkout Demo
//!
//! Console walkthrough of the checkout flow.
//!
//! ## Usage
//! ```bash
//! cargo run -p checkout-demo
//!
//! # Different holiday rate, more logging
//! CHECKOUT_HOLIDAY_RATE_BPS=2500 RUST_LOG=debug cargo run -p checkout-demo
//!
//! # Settings from a file
//! CHECKOUT_CONFIG=./demo.toml cargo run -p checkout-demo
//! ```

mod catalog;
mod config;
mod walkthrough;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout_core::Reporter;

use crate::config::DemoConfig;

/// Prints report lines to stdout.
struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(
        preview_amount = %config.preview_amount,
        seasonal_rate = %config.seasonal_rate(),
        holiday_rate = %config.holiday_rate(),
        "Configuration loaded"
    );

    let processed = walkthrough::run(&config, Arc::new(StdoutReporter));
    info!(processed, "Walkthrough finished");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show discount calculations
/// - `RUST_LOG=checkout=trace` - Trace for checkout crates only
/// - Default: `warn`, so report lines on stdout stay readable
///
/// Logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
