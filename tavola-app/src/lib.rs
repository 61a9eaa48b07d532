use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use tavola_order::{Order, Payment, PaymentReceipt};
use tavola_store::app_config::Config;
use tracing::info;

/// Printed bill and the receipt of the charge it describes
#[derive(Debug, Clone)]
pub struct Checkout {
    pub bill: String,
    pub receipt: PaymentReceipt,
}

/// Seed (when enabled), load the catalog, order everything on it and pay.
pub fn run(config: &Config) -> anyhow::Result<Checkout> {
    let path = &config.menu.path;

    if config.menu.seed_on_start {
        tavola_store::seed_menu(path)
            .with_context(|| format!("Failed to seed menu at {}", path.display()))?;
    }

    let menu = tavola_store::load_menu(path)
        .with_context(|| format!("Failed to load menu from {}", path.display()))?;
    info!("Catalog has {} items", menu.len());

    let mut order = Order::new();
    for item in menu {
        order.add_item(item);
    }
    let order = Rc::new(RefCell::new(order));

    let mut payment = Payment::new(order.clone(), config.payment.method.clone())
        .with_pricing(config.pricing.clone());

    let bill = order.borrow().display_with(&config.pricing).to_string();
    println!("{}", bill);
    let receipt = payment.process_payment();
    println!("{}", receipt);

    Ok(Checkout { bill, receipt })
}
