use super::*;
use shared::models::MenuItem;

fn fixture_catalog() -> Rc<MenuCatalog> {
    Rc::new(MenuCatalog::from_items(vec![
        MenuItem {
            id: 1,
            name: "Garlic Bread".to_string(),
            description: String::new(),
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
    ]))
}

fn takeaway_order() -> Order {
    Order::new(OrderType::Takeaway, fixture_catalog(), 9.99)
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let mut order = takeaway_order();
    order.add_item(1, 2).unwrap();
    order.add_item(1, 3).unwrap();
    order.add_item(1, 1).unwrap();

    assert_eq!(order.items().len(), 1);
    assert_eq!(order.items()[0].quantity, 6);
}

#[test]
fn merge_keeps_first_seen_display_order() {
    let mut order = takeaway_order();
    order.add_item(2, 1).unwrap();
    order.add_item(1, 1).unwrap();
    order.add_item(2, 1).unwrap();

    let ids: Vec<i64> = order.items().iter().map(|l| l.item.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn add_item_rejects_bad_index_and_quantity() {
    let mut order = takeaway_order();
    assert!(matches!(order.add_item(0, 1), Err(PosError::InvalidIndex)));
    assert!(matches!(order.add_item(3, 1), Err(PosError::InvalidIndex)));
    assert!(matches!(order.add_item(1, 0), Err(PosError::InvalidQuantity)));
    assert!(order.is_empty());
}

#[test]
fn takeaway_example_totals() {
    // 2 x 5.00 + 1 x 3.50 = 13.50, no delivery fee
    let mut order = takeaway_order();
    order.add_item(1, 2).unwrap();
    order.add_item(2, 1).unwrap();

    let totals = order.totals();
    assert_eq!(totals.subtotal, 13.50);
    assert_eq!(totals.delivery_fee, 0.0);
    assert_eq!(totals.order_total, 13.50);
}

#[test]
fn totals_are_idempotent() {
    let mut order = takeaway_order();
    order.add_item(1, 2).unwrap();
    order.add_item(2, 1).unwrap();

    let first = order.totals();
    let second = order.totals();
    assert_eq!(first, second);
}

#[test]
fn delivery_orders_carry_the_fee() {
    let mut order = Order::new(OrderType::Delivery, fixture_catalog(), 9.99);
    order.add_item(2, 2).unwrap();

    let totals = order.totals();
    assert_eq!(totals.subtotal, 7.00);
    assert_eq!(totals.delivery_fee, 9.99);
    assert_eq!(totals.order_total, 16.99);
}

#[test]
fn dine_in_totals_equal_subtotal() {
    let mut order = Order::new(OrderType::DineIn, fixture_catalog(), 9.99);
    order.add_item(1, 1).unwrap();

    let totals = order.totals();
    assert_eq!(totals.order_total, totals.subtotal);
}

#[test]
fn partial_removal_decrements_quantity() {
    let mut order = takeaway_order();
    order.add_item(1, 5).unwrap();

    let message = order.remove_item(1, 2).unwrap();
    assert_eq!(message, "Garlic Bread (x2) removed");
    assert_eq!(order.items()[0].quantity, 3);
}

#[test]
fn full_removal_drops_the_line() {
    let mut order = takeaway_order();
    order.add_item(1, 2).unwrap();
    order.add_item(2, 1).unwrap();

    order.remove_item(1, 2).unwrap();
    assert_eq!(order.items().len(), 1);
    assert_eq!(order.items()[0].item.id, 2);
}

#[test]
fn remove_item_rejects_bad_bounds() {
    let mut order = takeaway_order();
    order.add_item(1, 2).unwrap();

    assert!(matches!(order.remove_item(0, 1), Err(PosError::InvalidIndex)));
    assert!(matches!(order.remove_item(2, 1), Err(PosError::InvalidIndex)));
    assert!(matches!(order.remove_item(1, 0), Err(PosError::InvalidQuantity)));
    assert!(matches!(order.remove_item(1, 3), Err(PosError::InvalidQuantity)));
    // Failed removals leave the line untouched
    assert_eq!(order.items()[0].quantity, 2);
}

#[test]
fn line_total_rounds_to_two_places() {
    let catalog = Rc::new(MenuCatalog::from_items(vec![MenuItem {
        id: 9,
        name: "Oddly Priced".to_string(),
        description: String::new(),
        price: 3.333,
        category: "Specials".to_string(),
        availability: true,
        active: true,
    }]));
    let mut order = Order::new(OrderType::Takeaway, catalog, 9.99);
    order.add_item(1, 3).unwrap();

    // 3.333 * 3 = 9.999 -> 10.00
    assert_eq!(order.totals().subtotal, 10.00);
}

#[test]
fn each_order_gets_a_fresh_id() {
    let a = takeaway_order();
    let b = takeaway_order();
    assert_ne!(a.order_id(), b.order_id());
    assert!(!a.order_id().is_empty());
}
