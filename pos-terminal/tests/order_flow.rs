//! End-to-end order flow against a temporary data directory

use chrono::{Duration, Local};
use pos_terminal::Config;
use pos_terminal::catalog::MenuCatalog;
use pos_terminal::checkout::{CheckoutFlow, CheckoutState, ConfirmOutcome, SubmitOutcome};
use pos_terminal::invoice;
use pos_terminal::orders::Order;
use pos_terminal::storage::JsonStore;
use shared::OrderType;
use shared::models::{InvoiceRecord, MenuItem};
use std::rc::Rc;

fn seed_menu(config: &Config) {
    let menu = vec![
        MenuItem {
            id: 1,
            name: "Garlic Bread".to_string(),
            description: "Toasted sourdough".to_string(),
            price: 5.00,
            category: "Starters".to_string(),
            availability: true,
            active: true,
        },
        MenuItem {
            id: 2,
            name: "Lemonade".to_string(),
            description: String::new(),
            price: 3.50,
            category: "Drinks".to_string(),
            availability: true,
            active: true,
        },
        MenuItem {
            id: 3,
            name: "Off Special".to_string(),
            description: String::new(),
            price: 12.00,
            category: "Mains".to_string(),
            availability: false,
            active: true,
        },
    ];
    JsonStore::new(config.menu_path()).write(&menu).unwrap();
}

fn test_config() -> (tempfile::TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    (dir, config)
}

#[test]
fn takeaway_order_from_menu_to_filed_invoice() {
    let (_dir, config) = test_config();
    seed_menu(&config);

    // Unavailable items never reach the catalog
    let catalog = Rc::new(MenuCatalog::load(&JsonStore::new(config.menu_path())));
    assert_eq!(catalog.count(), 2);

    let mut order = Order::new(OrderType::Takeaway, Rc::clone(&catalog), config.delivery_fee);
    order.add_item(1, 1).unwrap();
    order.add_item(2, 1).unwrap();
    order.add_item(1, 1).unwrap();

    let totals = order.totals();
    assert_eq!(totals.subtotal, 13.50);
    assert_eq!(totals.order_total, 13.50);

    let mut flow = CheckoutFlow::new(order);
    let expiry = (Local::now().date_naive() + Duration::days(400))
        .format("%m/%y")
        .to_string();
    for input in [
        "4532015112830366",
        expiry.as_str(),
        "123",
        "ada lovelace",
        "ada lovelace",
        "0412345678",
        "ada@example.com",
    ] {
        assert_ne!(flow.submit(input), SubmitOutcome::Rejected, "input {input:?}");
    }
    assert_eq!(flow.submit("no onions"), SubmitOutcome::FieldsComplete);
    assert_eq!(flow.confirm("p"), ConfirmOutcome::Paid);
    assert_eq!(flow.state(), CheckoutState::Paid);

    let record = invoice::build_record(&flow, Local::now()).unwrap();
    invoice::file_record(&record, &config).unwrap();

    // Merged line: two garlic breads on one line
    assert_eq!(record.items.len(), 2);
    assert_eq!(record.items[0].quantity, 2);
    assert_eq!(record.order_total, 13.50);
    assert_eq!(record.payment_info.card_number, "************0366");
    assert_eq!(record.contact_information.as_ref().unwrap().name, "Ada Lovelace");

    // Dual write: per-order invoice and the append-only history
    assert!(config.invoice_path(&record.order_id).exists());
    let history: Vec<InvoiceRecord> = JsonStore::new(config.order_history_path()).read();
    assert_eq!(history, vec![record]);
}

#[test]
fn history_accumulates_across_orders() {
    let (_dir, config) = test_config();
    seed_menu(&config);
    let catalog = Rc::new(MenuCatalog::load(&JsonStore::new(config.menu_path())));

    for _ in 0..2 {
        let mut order = Order::new(OrderType::DineIn, Rc::clone(&catalog), config.delivery_fee);
        order.add_item(1, 1).unwrap();
        let mut flow = CheckoutFlow::new(order);
        let expiry = (Local::now().date_naive() + Duration::days(400))
            .format("%m/%y")
            .to_string();
        for input in ["4532015112830366", expiry.as_str(), "123", "ada", "7", ""] {
            assert_ne!(flow.submit(input), SubmitOutcome::Rejected);
        }
        flow.confirm("p");
        let record = invoice::build_record(&flow, Local::now()).unwrap();
        invoice::file_record(&record, &config).unwrap();
    }

    let history: Vec<InvoiceRecord> = JsonStore::new(config.order_history_path()).read();
    assert_eq!(history.len(), 2);
    // Fresh id per order
    assert_ne!(history[0].order_id, history[1].order_id);
}

#[test]
fn missing_and_corrupt_stores_degrade_to_empty() {
    let (_dir, config) = test_config();

    let history: Vec<InvoiceRecord> = JsonStore::new(config.order_history_path()).read();
    assert!(history.is_empty());

    std::fs::write(config.order_history_path(), "not json").unwrap();
    let history: Vec<InvoiceRecord> = JsonStore::new(config.order_history_path()).read();
    assert!(history.is_empty());
}
