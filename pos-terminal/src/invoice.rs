//! Invoice assembly
//!
//! Snapshots a finalized order + payment into the immutable
//! [`InvoiceRecord`] and forwards it to the two stores: the per-order
//! file (the kitchen display interface) and the append-only order
//! history. The two writes are sequential and best-effort; a failure
//! after the first write leaves an accepted inconsistency window.

use crate::checkout::{CheckoutFlow, CheckoutState};
use crate::core::config::Config;
use crate::orders::LineItem;
use crate::orders::money::to_f64;
use crate::storage::JsonStore;
use chrono::{DateTime, Local};
use shared::models::{ContactInformation, DeliveryAddress, InvoiceItem, InvoiceRecord, PaymentInfo};
use shared::{OrderDetails, PosError, PosResult};

/// Build the immutable snapshot from a checkout in terminal `Paid` state.
///
/// Deterministic given the flow and timestamp; the caller decides the
/// clock so reports and tests can pin it.
pub fn build_record(flow: &CheckoutFlow, at: DateTime<Local>) -> PosResult<InvoiceRecord> {
    if flow.state() != CheckoutState::Paid {
        return Err(PosError::validation("payment has not been finalized"));
    }
    let order = flow.order();
    if order.is_empty() {
        return Err(PosError::validation("cannot invoice an empty order"));
    }

    let totals = order.totals();
    let items = order
        .items()
        .iter()
        .map(|line: &LineItem| InvoiceItem {
            id: line.item.id,
            name: line.item.name.clone(),
            quantity: line.quantity,
            price: line.item.price,
            total_price: to_f64(line.line_total()),
        })
        .collect();

    let payment = flow.payment();
    let mut record = InvoiceRecord {
        date_time: at.format("%Y-%m-%d %H:%M:%S").to_string(),
        order_id: order.order_id().to_string(),
        order_type: order.order_type().label().to_string(),
        items,
        subtotal: totals.subtotal,
        delivery_fee: totals.delivery_fee,
        order_total: totals.order_total,
        payment_info: PaymentInfo {
            card_number: flow.masked_card_number(),
            expiration_date: payment.expiration_date.clone(),
            cvv: payment.cvv.clone(),
            cardholder_name: payment.cardholder_name.clone(),
            note: payment.note.clone(),
        },
        contact_information: None,
        delivery_address: None,
        table_number: None,
    };

    match order.details() {
        OrderDetails::DineIn(d) => {
            record.table_number = Some(d.table_number.clone());
        }
        OrderDetails::Takeaway(d) => {
            record.contact_information = Some(ContactInformation {
                name: d.name.clone(),
                mobile_number: d.mobile_number.clone(),
                email: d.email.clone(),
            });
        }
        OrderDetails::Delivery(d) => {
            record.contact_information = Some(ContactInformation {
                name: d.name.clone(),
                mobile_number: d.mobile_number.clone(),
                email: d.email.clone(),
            });
            record.delivery_address = Some(DeliveryAddress {
                address: d.address.clone(),
                suburb: d.suburb.clone(),
                postal_code: d.postal_code.clone(),
            });
        }
    }

    Ok(record)
}

/// Forward a snapshot to the kitchen display store and the order
/// history, in that order
pub fn file_record(record: &InvoiceRecord, config: &Config) -> PosResult<()> {
    let kds = JsonStore::new(config.invoice_path(&record.order_id));
    kds.write_single(record)?;

    let history = JsonStore::new(config.order_history_path());
    history.append(record.clone())?;

    tracing::info!(order_id = %record.order_id, total = record.order_total, "Invoice filed");
    Ok(())
}

/// Render the customer-facing receipt text
pub fn render_receipt(record: &InvoiceRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Date Time: {}\n", record.date_time));
    out.push_str(&format!("Order ID: {}\n", record.order_id));
    out.push_str(&format!("Order Type: {}\n\nItems:\n", record.order_type));
    for (i, item) in record.items.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - {} x ${:.2} = ${:.2}\n",
            i + 1,
            item.name,
            item.quantity,
            item.price,
            item.total_price
        ));
    }
    if record.delivery_fee > 0.0 {
        out.push_str(&format!("\nDelivery Fee: ${:.2}\n", record.delivery_fee));
    }
    out.push_str(&format!("\nSubtotal: ${:.2}\n", record.subtotal));
    out.push_str(&format!("Order Total: ${:.2}\n", record.order_total));
    if let Some(contact) = &record.contact_information {
        out.push_str(&format!(
            "\nContact Information:\nName: {}\nMobile Number: {}\nEmail: {}\n",
            contact.name, contact.mobile_number, contact.email
        ));
    }
    if let Some(delivery) = &record.delivery_address {
        out.push_str(&format!(
            "\nDelivery Address:\nAddress: {}\nSuburb: {}\nPostal Code: {}\n",
            delivery.address, delivery.suburb, delivery.postal_code
        ));
    }
    if let Some(table) = &record.table_number {
        out.push_str(&format!("\nTable Number: {table}\n"));
    }
    out.push_str(&format!("\nNote: {}\n", record.payment_info.note));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::checkout::SubmitOutcome;
    use crate::orders::Order;
    use chrono::{Duration, TimeZone};
    use shared::OrderType;
    use shared::models::MenuItem;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn paid_delivery_flow() -> CheckoutFlow {
        let catalog = Rc::new(MenuCatalog::from_items(vec![MenuItem {
            id: 1,
            name: "Laksa".to_string(),
            description: String::new(),
            price: 15.50,
            category: "Mains".to_string(),
            availability: true,
            active: true,
        }]));
        let mut order = Order::new(OrderType::Delivery, catalog, 9.99);
        order.add_item(1, 2).unwrap();

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
            "12 smith st",
            "fitzroy",
            "3065",
        ] {
            assert_ne!(flow.submit(input), SubmitOutcome::Rejected, "input {input:?}");
        }
        flow.submit("ring the bell");
        flow.confirm("p");
        flow
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn snapshot_copies_lines_and_totals() {
        let flow = paid_delivery_flow();
        let record = build_record(&flow, fixed_time()).unwrap();

        assert_eq!(record.date_time, "2026-03-01 12:30:00");
        assert_eq!(record.order_type, "Delivery");
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(record.items[0].total_price, 31.00);
        assert_eq!(record.subtotal, 31.00);
        assert_eq!(record.delivery_fee, 9.99);
        assert_eq!(record.order_total, 40.99);
    }

    #[test]
    fn snapshot_masks_the_card_number() {
        let flow = paid_delivery_flow();
        let record = build_record(&flow, fixed_time()).unwrap();
        assert_eq!(record.payment_info.card_number, "************0366");
    }

    #[test]
    fn delivery_snapshot_carries_contact_and_address() {
        let flow = paid_delivery_flow();
        let record = build_record(&flow, fixed_time()).unwrap();

        let contact = record.contact_information.unwrap();
        assert_eq!(contact.name, "Ada Lovelace");
        let address = record.delivery_address.unwrap();
        assert_eq!(address.suburb, "Fitzroy");
        assert!(record.table_number.is_none());
    }

    #[test]
    fn unpaid_flow_cannot_be_invoiced() {
        let catalog = Rc::new(MenuCatalog::from_items(vec![]));
        let order = Order::new(OrderType::DineIn, catalog, 9.99);
        let flow = CheckoutFlow::new(order);
        assert!(build_record(&flow, fixed_time()).is_err());
    }

    #[test]
    fn filing_writes_both_stores() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: PathBuf::from(dir.path()),
            ..Config::default()
        };

        let flow = paid_delivery_flow();
        let record = build_record(&flow, fixed_time()).unwrap();
        file_record(&record, &config).unwrap();

        assert!(config.invoice_path(&record.order_id).exists());
        let history: Vec<InvoiceRecord> = JsonStore::new(config.order_history_path()).read();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], record);
    }

    #[test]
    fn receipt_lists_items_and_totals() {
        let flow = paid_delivery_flow();
        let record = build_record(&flow, fixed_time()).unwrap();
        let receipt = render_receipt(&record);

        assert!(receipt.contains("1. Laksa - 2 x $15.50 = $31.00"));
        assert!(receipt.contains("Delivery Fee: $9.99"));
        assert!(receipt.contains("Order Total: $40.99"));
        assert!(receipt.contains("Note: ring the bell"));
    }
}
