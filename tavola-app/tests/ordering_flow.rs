use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tavola_catalog::{MenuItem, MenuItemPatch, PricingRules};
use tavola_order::{Order, Payment};
use tavola_store::app_config::{Config, MenuConfig, PaymentConfig};

fn config(path: &Path, seed_on_start: bool) -> Config {
    Config {
        menu: MenuConfig {
            path: path.to_path_buf(),
            seed_on_start,
        },
        pricing: PricingRules::default(),
        payment: PaymentConfig {
            method: "Credit card".to_string(),
        },
    }
}

#[test]
fn test_seeded_catalog_order_and_payment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");

    let receipt = tavola::run(&config(&path, true)).unwrap().receipt;

    // 1.50 * 0.9 + 4.00 * 0.9 + 3.50 + 9.00
    assert!((receipt.amount - 17.45).abs() < 1e-9);
    assert_eq!(receipt.payment_method, "Credit card");
}

#[test]
fn test_run_without_seed_uses_existing_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    tavola_store::save_menu(&[MenuItem::beverage("Cola", 2.00, false)], &path).unwrap();

    let receipt = tavola::run(&config(&path, false)).unwrap().receipt;
    assert_eq!(receipt.amount, 2.00);
}

#[test]
fn test_bill_total_matches_charge_under_configured_pricing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    let mut config = config(&path, true);
    config.pricing = PricingRules {
        bulk_threshold: 2,
        bulk_discount: 0.5,
        ..PricingRules::default()
    };

    let checkout = tavola::run(&config).unwrap();

    // (1.35 + 3.60 + 3.50 + 9.00) * 0.5
    assert!((checkout.receipt.amount - 8.725).abs() < 1e-9);
    let expected = format!("Total: ${:.2}", checkout.receipt.amount);
    assert_eq!(checkout.bill.lines().last(), Some(expected.as_str()));
}

#[test]
fn test_catalog_edits_flow_into_order_total() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");

    tavola_store::seed_menu(&path).unwrap();
    tavola_store::update_menu_item("Pizza Margarita", &MenuItemPatch::price(10.00), &path).unwrap();
    tavola_store::delete_menu_item("Agua mineral", &path).unwrap();
    tavola_store::add_menu_item(MenuItem::appetizer("Salad", 2.00, 1), &path).unwrap();

    let menu = tavola_store::load_menu(&path).unwrap();
    assert_eq!(menu.len(), 4);

    let order = Rc::new(RefCell::new(Order::new()));
    for item in menu {
        order.borrow_mut().add_item(item);
    }
    let mut payment = Payment::new(order.clone(), "Cash");

    // 4.00 * 0.9 + 3.50 + 10.00 + 2.00
    let receipt = payment.process_payment();
    assert!((receipt.amount - 19.10).abs() < 1e-9);

    // fifth item tips the order into the bulk discount
    order.borrow_mut().add_item(MenuItem::new("Bread", 0.90));
    let receipt = payment.process_payment();
    assert!((receipt.amount - 20.00 * 0.9).abs() < 1e-9);
    assert!(payment.is_paid());
}
