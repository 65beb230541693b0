//! Staff reports
//!
//! Tabulations over the order history and the reservation book. Pure
//! functions from records + a reference date to rendered text; the
//! dashboard reads the stores and prints whatever comes back.

use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{InvoiceRecord, ReservationRecord};
use shared::validation;

const SALE_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse the `DD/MM/YYYY` date entered at the report prompt, gated by
/// the shared date predicate
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    if !validation::valid_date(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
}

/// Sales recorded on one calendar day, chronological
pub fn sales_report(sales: &[InvoiceRecord], on: NaiveDate) -> String {
    if sales.is_empty() {
        return "No sales found.".to_string();
    }

    let mut on_day: Vec<(NaiveDateTime, &InvoiceRecord)> = sales
        .iter()
        .filter_map(|sale| {
            let stamp = NaiveDateTime::parse_from_str(&sale.date_time, SALE_STAMP_FORMAT).ok()?;
            (stamp.date() == on).then_some((stamp, sale))
        })
        .collect();

    if on_day.is_empty() {
        return format!("No sales found on {}.", on.format("%d/%m/%Y"));
    }
    on_day.sort_by_key(|(stamp, _)| *stamp);

    let rows: Vec<Vec<String>> = on_day
        .iter()
        .map(|(_, sale)| {
            let mut items: Vec<String> = sale
                .items
                .iter()
                .map(|item| format!("{} (x{}) - ${:.2}", item.name, item.quantity, item.total_price))
                .collect();
            if sale.delivery_fee > 0.0 {
                items.push(format!("Delivery Fee - ${:.2}", sale.delivery_fee));
            }
            vec![
                sale.date_time.clone(),
                sale.order_id.clone(),
                sale.order_type.clone(),
                items.join("; "),
                format!("${:.2}", sale.order_total),
            ]
        })
        .collect();

    render_table(
        &["Date Time", "Order ID", "Order Type", "Items", "Order Total"],
        &rows,
    )
}

/// Quantity of each menu item sold on one calendar day, first-sold order
pub fn items_sold_report(sales: &[InvoiceRecord], on: NaiveDate) -> String {
    if sales.is_empty() {
        return "No sales found.".to_string();
    }

    let mut tally: Vec<(String, u32)> = Vec::new();
    for sale in sales {
        let Ok(stamp) = NaiveDateTime::parse_from_str(&sale.date_time, SALE_STAMP_FORMAT) else {
            continue;
        };
        if stamp.date() != on {
            continue;
        }
        for item in &sale.items {
            match tally.iter_mut().find(|(name, _)| *name == item.name) {
                Some((_, count)) => *count += item.quantity,
                None => tally.push((item.name.clone(), item.quantity)),
            }
        }
    }

    if tally.is_empty() {
        return format!("No menu items sold on {}.", on.format("%d/%m/%Y"));
    }

    let rows: Vec<Vec<String>> = tally
        .into_iter()
        .map(|(name, count)| vec![name, count.to_string()])
        .collect();
    render_table(&["Item Name", "Quantity Ordered"], &rows)
}

/// Bookings at or after `now`, soonest first
pub fn upcoming_reservations_report(reservations: &[ReservationRecord], now: NaiveDateTime) -> String {
    if reservations.is_empty() {
        return "No reservations found.".to_string();
    }

    let mut upcoming: Vec<(NaiveDateTime, &ReservationRecord)> = reservations
        .iter()
        .filter_map(|r| {
            let stamp =
                NaiveDateTime::parse_from_str(&format!("{} {}", r.date, r.time), "%d/%m/%Y %H:%M")
                    .ok()?;
            (stamp >= now).then_some((stamp, r))
        })
        .collect();

    if upcoming.is_empty() {
        return "No reservations found.".to_string();
    }
    upcoming.sort_by_key(|(stamp, _)| *stamp);

    let rows: Vec<Vec<String>> = upcoming
        .iter()
        .map(|(_, r)| {
            vec![
                r.date.clone(),
                r.time.clone(),
                r.name.clone(),
                r.mobile_number.clone(),
                r.email.clone(),
                r.party_size.to_string(),
                if r.accommodations.is_empty() {
                    "None".to_string()
                } else {
                    r.accommodations.clone()
                },
            ]
        })
        .collect();

    render_table(
        &["Date", "Time", "Name", "Mobile Number", "Email", "Party Size", "Accommodations"],
        &rows,
    )
}

/// Fixed-width column layout; widths sized to content
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", header, width = widths[i]));
    }
    out.push('\n');
    for (i, _) in headers.iter().enumerate() {
        out.push_str(&"-".repeat(widths[i]));
        out.push_str("  ");
    }
    out.push('\n');
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{InvoiceItem, PaymentInfo};

    fn sale(date_time: &str, order_id: &str, total: f64) -> InvoiceRecord {
        InvoiceRecord {
            date_time: date_time.to_string(),
            order_id: order_id.to_string(),
            order_type: "Takeaway".to_string(),
            items: vec![InvoiceItem {
                id: 1,
                name: "Laksa".to_string(),
                quantity: 2,
                price: total / 2.0,
                total_price: total,
            }],
            subtotal: total,
            delivery_fee: 0.0,
            order_total: total,
            payment_info: PaymentInfo {
                card_number: "************0366".to_string(),
                expiration_date: "12/30".to_string(),
                cvv: "123".to_string(),
                cardholder_name: "Ada".to_string(),
                note: String::new(),
            },
            contact_information: None,
            delivery_address: None,
            table_number: None,
        }
    }

    fn reservation(date: &str, time: &str, name: &str) -> ReservationRecord {
        ReservationRecord {
            date: date.to_string(),
            time: time.to_string(),
            name: name.to_string(),
            mobile_number: "0412345678".to_string(),
            email: "x@example.com".to_string(),
            party_size: 2,
            accommodations: String::new(),
        }
    }

    #[test]
    fn report_date_prompt_accepts_only_well_formed_calendar_dates() {
        assert_eq!(
            parse_report_date("01/03/2026"),
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );
        assert_eq!(parse_report_date("2026-03-01"), None);
        assert_eq!(parse_report_date("31/02/2026"), None);
        assert_eq!(parse_report_date("tomorrow"), None);
    }

    #[test]
    fn sales_filtered_to_the_requested_day_and_sorted() {
        let sales = vec![
            sale("2026-03-02 19:00:00", "later", 20.0),
            sale("2026-03-01 19:00:00", "evening", 30.0),
            sale("2026-03-01 12:00:00", "noon", 10.0),
        ];
        let report = sales_report(&sales, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        assert!(report.contains("noon"));
        assert!(report.contains("evening"));
        assert!(!report.contains("later"));
        // Chronological: noon before evening
        assert!(report.find("noon").unwrap() < report.find("evening").unwrap());
    }

    #[test]
    fn empty_history_and_empty_day_messages_differ() {
        assert_eq!(
            sales_report(&[], NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            "No sales found."
        );
        let sales = vec![sale("2026-03-02 19:00:00", "x", 20.0)];
        assert_eq!(
            sales_report(&sales, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            "No sales found on 01/03/2026."
        );
    }

    #[test]
    fn delivery_fee_appears_as_a_pseudo_item() {
        let mut delivery = sale("2026-03-01 12:00:00", "d1", 31.0);
        delivery.delivery_fee = 9.99;
        delivery.order_total = 40.99;
        let report = sales_report(&[delivery], NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert!(report.contains("Delivery Fee - $9.99"));
        assert!(report.contains("$40.99"));
    }

    #[test]
    fn items_sold_tallies_across_orders() {
        let sales = vec![
            sale("2026-03-01 12:00:00", "a", 10.0),
            sale("2026-03-01 13:00:00", "b", 10.0),
            sale("2026-03-02 13:00:00", "c", 10.0),
        ];
        let report = items_sold_report(&sales, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        // Two orders of 2 each on the day
        assert!(report.contains("Laksa"));
        assert!(report.contains('4'));
    }

    #[test]
    fn upcoming_reservations_drop_the_past_and_sort() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let reservations = vec![
            reservation("02/03/2026", "19:00", "Later"),
            reservation("01/03/2026", "18:00", "Tonight"),
            reservation("28/02/2026", "18:00", "Past"),
        ];
        let report = upcoming_reservations_report(&reservations, now);

        assert!(report.contains("Tonight"));
        assert!(report.contains("Later"));
        assert!(!report.contains("Past"));
        assert!(report.find("Tonight").unwrap() < report.find("Later").unwrap());
    }

    #[test]
    fn empty_accommodations_render_as_none() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let report = upcoming_reservations_report(&[reservation("01/03/2026", "18:00", "X")], now);
        assert!(report.contains("None"));
    }
}
