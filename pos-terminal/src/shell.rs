//! Interactive session
//!
//! Menu-driven loop tying the pure flows to the console adapter. All
//! decisions about prompts, screens and navigation tokens live here;
//! the flows underneath never print.

use crate::auth;
use crate::catalog::MenuCatalog;
use crate::checkout::{CheckoutFlow, CheckoutState, ConfirmOutcome, SubmitOutcome};
use crate::console;
use crate::core::config::Config;
use crate::invoice;
use crate::orders::Order;
use crate::reports;
use crate::reservations::{
    ConfirmOutcome as ReservationConfirm, ReservationFlow, ReservationState,
    SubmitOutcome as ReservationSubmit,
};
use crate::storage::JsonStore;
use chrono::{Local, NaiveDate};
use shared::OrderType;
use shared::models::{InvoiceRecord, ReservationRecord};
use std::rc::Rc;

/// Whether the session keeps running after a submenu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Continue,
    Shutdown,
}

pub struct Shell {
    config: Config,
    catalog: Rc<MenuCatalog>,
}

impl Shell {
    pub fn new(config: Config, catalog: Rc<MenuCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Top-level loop; returns when the customer leaves or staff shut
    /// the terminal down
    pub fn run(&self) {
        loop {
            console::clear_screen();
            console::heading("Main Menu");
            console::display_message("[1] Customer");
            console::display_message("[2] Employee");
            console::display_message("[E] Exit");

            let Some(choice) = console::prompt("Select an option") else {
                return;
            };
            match choice.to_lowercase().as_str() {
                "1" => self.customer_menu(),
                "2" => {
                    if self.staff_entry() == Signal::Shutdown {
                        return;
                    }
                }
                "e" => return,
                _ => self.invalid_selection(),
            }
        }
    }

    fn customer_menu(&self) {
        loop {
            console::clear_screen();
            console::heading("Customer Menu");
            console::display_message("[1] Reserve a Table");
            console::display_message("[2] View Menu");
            console::display_message("[3] Place an Order");
            console::display_message("[E] Back");

            let Some(choice) = console::prompt("Select an option") else {
                return;
            };
            match choice.to_lowercase().as_str() {
                "1" => self.reserve_table(),
                "2" => self.view_menu(),
                "3" => self.take_order(),
                "e" => return,
                _ => self.invalid_selection(),
            }
        }
    }

    fn view_menu(&self) {
        console::clear_screen();
        console::heading("Menu");
        if self.catalog.is_empty() {
            console::display_message("No menu items are available right now.");
        }
        for (i, item) in self.catalog.iter().enumerate() {
            console::display_message(&format!("{}. {} - ${:.2}", i + 1, item.name, item.price));
            if !item.description.is_empty() {
                console::display_message(&format!("   {}", item.description));
            }
        }
        self.pause();
    }

    // ----- ordering -----

    fn take_order(&self) {
        let Some(order_type) = self.select_order_type() else {
            return;
        };
        if self.catalog.is_empty() {
            console::display_message("No menu items are available right now.");
            self.pause();
            return;
        }

        let mut order = Order::new(order_type, Rc::clone(&self.catalog), self.config.delivery_fee);
        loop {
            self.render_order_screen(&order);
            let Some(input) =
                console::prompt("Enter an item number, [V] to view cart, or [E] to cancel")
            else {
                return;
            };
            match input.to_lowercase().as_str() {
                "e" => return,
                "v" => match self.cart_screen(&mut order) {
                    CartAction::Back => {}
                    CartAction::Cancel => return,
                    CartAction::Pay => {
                        self.checkout(order);
                        return;
                    }
                },
                _ => self.add_item(&mut order, &input),
            }
        }
    }

    fn select_order_type(&self) -> Option<OrderType> {
        loop {
            console::clear_screen();
            console::heading("Order Type");
            console::display_message("[1] Dine-In");
            console::display_message("[2] Takeaway");
            console::display_message("[3] Delivery");
            console::display_message("[E] Back");

            let choice = console::prompt("Select an order type")?;
            if choice.eq_ignore_ascii_case("e") {
                return None;
            }
            match OrderType::from_selection(&choice) {
                Ok(order_type) => return Some(order_type),
                Err(err) => {
                    console::display_message(&format!("[ERROR] {err}"));
                    self.pause();
                }
            }
        }
    }

    fn render_order_screen(&self, order: &Order) {
        console::clear_screen();
        console::heading(&format!("New {} Order", order.order_type().label()));
        for (i, item) in self.catalog.iter().enumerate() {
            console::display_message(&format!("{}. {} - ${:.2}", i + 1, item.name, item.price));
        }
        let totals = order.totals();
        console::display_message(&format!(
            "\nCart: {} line(s), subtotal ${:.2}",
            order.items().len(),
            totals.subtotal
        ));
    }

    fn add_item(&self, order: &mut Order, raw_index: &str) {
        let Ok(index) = raw_index.parse::<usize>() else {
            console::display_message("[ERROR] Please enter a valid item number.");
            self.pause();
            return;
        };
        let Some(raw_quantity) = console::prompt("Quantity") else {
            return;
        };
        let Ok(quantity) = raw_quantity.parse::<u32>() else {
            console::display_message("[ERROR] Please enter a valid quantity.");
            self.pause();
            return;
        };
        if let Err(err) = order.add_item(index, quantity) {
            console::display_message(&format!("[ERROR] {err}"));
            self.pause();
        }
    }

    fn cart_screen(&self, order: &mut Order) -> CartAction {
        loop {
            console::clear_screen();
            console::heading("Your Cart");
            if order.is_empty() {
                console::display_message("Your cart is empty.");
            }
            for (i, line) in order.items().iter().enumerate() {
                console::display_message(&format!(
                    "{}. {} x{} - ${:.2}",
                    i + 1,
                    line.item.name,
                    line.quantity,
                    crate::orders::money::to_f64(line.line_total())
                ));
            }
            let totals = order.totals();
            console::display_message(&format!("\nSubtotal: ${:.2}", totals.subtotal));
            if totals.delivery_fee > 0.0 {
                console::display_message(&format!("Delivery Fee: ${:.2}", totals.delivery_fee));
            }
            console::display_message(&format!("Order Total: ${:.2}\n", totals.order_total));
            console::display_message("[R] Remove an item");
            console::display_message("[P] Pay");
            console::display_message("[B] Back to menu");
            console::display_message("[E] Cancel order");

            let Some(choice) = console::prompt("Select an option") else {
                return CartAction::Cancel;
            };
            match choice.to_lowercase().as_str() {
                "r" => self.remove_item(order),
                "p" => {
                    if order.is_empty() {
                        console::display_message("[ERROR] Your cart is empty.");
                        self.pause();
                    } else {
                        return CartAction::Pay;
                    }
                }
                "b" => return CartAction::Back,
                "e" => return CartAction::Cancel,
                _ => self.invalid_selection(),
            }
        }
    }

    fn remove_item(&self, order: &mut Order) {
        let Some(raw_index) = console::prompt("Item number to remove") else {
            return;
        };
        let Ok(index) = raw_index.parse::<usize>() else {
            console::display_message("[ERROR] Please enter a valid item number.");
            self.pause();
            return;
        };
        let Some(raw_quantity) = console::prompt("Quantity to remove") else {
            return;
        };
        let Ok(quantity) = raw_quantity.parse::<u32>() else {
            console::display_message("[ERROR] Please enter a valid quantity.");
            self.pause();
            return;
        };
        match order.remove_item(index, quantity) {
            Ok(confirmation) => {
                console::display_message(&confirmation);
                self.pause();
            }
            Err(err) => {
                console::display_message(&format!("[ERROR] {err}"));
                self.pause();
            }
        }
    }

    // ----- checkout -----

    fn checkout(&self, order: Order) {
        let mut flow = CheckoutFlow::new(order);

        while flow.state() == CheckoutState::CollectingFields {
            let Some(field) = flow.next_field() else {
                // All fields already present; advance the machine
                flow.submit("");
                break;
            };
            self.render_checkout_screen(&mut flow);

            let Some(input) = console::prompt(field.prompt()) else {
                return;
            };
            if flow.submit(&input) == SubmitOutcome::Aborted {
                console::display_message("Payment cancelled.");
                self.pause();
                return;
            }
        }

        while flow.state() == CheckoutState::ReadyToConfirm {
            self.render_confirmation_screen(&mut flow);
            let Some(input) = console::prompt("[P] Pay or [E] Cancel") else {
                return;
            };
            match flow.confirm(&input) {
                ConfirmOutcome::Paid => break,
                ConfirmOutcome::Aborted => {
                    console::display_message("Payment cancelled.");
                    self.pause();
                    return;
                }
                ConfirmOutcome::Rejected => {}
            }
        }

        self.finalize(&flow);
    }

    fn render_checkout_screen(&self, flow: &mut CheckoutFlow) {
        console::clear_screen();
        console::heading("Checkout");
        let totals = flow.order().totals();
        console::display_message(&format!("Order Total: ${:.2}\n", totals.order_total));
        console::display_message("Enter [E] at any prompt to cancel.\n");

        let mut last_section = "";
        for (field, value) in flow.committed_fields() {
            if field.section() != last_section {
                console::display_message(&format!("{}:", field.section()));
                last_section = field.section();
            }
            let shown = if field == crate::checkout::Field::CardNumber {
                flow.masked_card_number()
            } else {
                value
            };
            console::display_message(&format!("  {}: {}", field.prompt(), shown));
        }
        if let Some(field) = flow.next_field()
            && field.section() != last_section
            && !field.section().is_empty()
        {
            console::display_message(&format!("{}:", field.section()));
        }
        if let Some(message) = flow.take_message() {
            console::display_message(&format!("[ERROR] {message}"));
        }
    }

    fn render_confirmation_screen(&self, flow: &mut CheckoutFlow) {
        console::clear_screen();
        console::heading("Confirm Payment");
        for line in flow.order().items() {
            console::display_message(&format!(
                "{} x{} - ${:.2}",
                line.item.name,
                line.quantity,
                crate::orders::money::to_f64(line.line_total())
            ));
        }
        let totals = flow.order().totals();
        console::display_message(&format!("\nSubtotal: ${:.2}", totals.subtotal));
        if totals.delivery_fee > 0.0 {
            console::display_message(&format!("Delivery Fee: ${:.2}", totals.delivery_fee));
        }
        console::display_message(&format!("Order Total: ${:.2}", totals.order_total));
        console::display_message(&format!("\nCard Number: {}", flow.masked_card_number()));
        console::display_message("\nAll payments are final once confirmed.");
        if let Some(message) = flow.take_message() {
            console::display_message(&format!("[ERROR] {message}"));
        }
    }

    fn finalize(&self, flow: &CheckoutFlow) {
        if flow.state() != CheckoutState::Paid {
            return;
        }
        let record = match invoice::build_record(flow, Local::now()) {
            Ok(record) => record,
            Err(err) => {
                console::display_message(&format!("[ERROR] {err}"));
                self.pause();
                return;
            }
        };
        if let Err(err) = invoice::file_record(&record, &self.config) {
            console::display_message(&format!("[ERROR] {err}"));
        }

        console::display_message("Payment successful. Thank you for your order!");
        if let Some(answer) = console::prompt("Would you like a receipt? (Y/N)")
            && answer.eq_ignore_ascii_case("y")
        {
            console::clear_screen();
            console::heading("Receipt");
            console::display_message(&invoice::render_receipt(&record));
        }
        self.pause();
    }

    // ----- reservations -----

    fn reserve_table(&self) {
        let mut flow = ReservationFlow::new(self.config.opening_time, self.config.closing_time);

        while flow.state() == ReservationState::CollectingFields {
            let Some(field) = flow.next_field() else {
                flow.submit("");
                break;
            };
            console::clear_screen();
            console::heading("Reserve a Table");
            console::display_message("Enter [E] at any prompt to cancel.\n");
            for (committed, value) in flow.committed_fields() {
                console::display_message(&format!("{}: {}", committed.prompt(), value));
            }
            if let Some(message) = flow.take_message() {
                console::display_message(&format!("[ERROR] {message}"));
            }

            let Some(input) = console::prompt(field.prompt()) else {
                return;
            };
            if flow.submit(&input) == ReservationSubmit::Aborted {
                console::display_message("Reservation cancelled.");
                self.pause();
                return;
            }
        }

        while flow.state() == ReservationState::ReadyToConfirm {
            console::clear_screen();
            console::heading("Confirm Reservation");
            for (field, value) in flow.committed_fields() {
                console::display_message(&format!("{}: {}", field.prompt(), value));
            }
            if let Some(message) = flow.take_message() {
                console::display_message(&format!("[ERROR] {message}"));
            }

            let Some(input) = console::prompt("[C] Confirm or [E] Cancel") else {
                return;
            };
            match flow.confirm(&input) {
                ReservationConfirm::Confirmed => break,
                ReservationConfirm::Cancelled => {
                    console::display_message("Reservation cancelled.");
                    self.pause();
                    return;
                }
                ReservationConfirm::Rejected => {}
            }
        }

        if flow.state() == ReservationState::Confirmed {
            let store = JsonStore::new(self.config.reservations_path());
            match flow.book(&store) {
                Ok(()) => console::display_message("Reservation confirmed. See you then!"),
                Err(err) => console::display_message(&format!("[ERROR] {err}")),
            }
            self.pause();
        }
    }

    // ----- staff -----

    fn staff_entry(&self) -> Signal {
        let Some(pin) = console::prompt("Enter staff PIN") else {
            return Signal::Continue;
        };
        if !auth::pin_matches(&pin, &self.config.staff_pin) {
            console::display_message("[ERROR] Incorrect PIN.");
            self.pause();
            return Signal::Continue;
        }
        self.staff_dashboard()
    }

    fn staff_dashboard(&self) -> Signal {
        loop {
            console::clear_screen();
            console::heading("Staff Dashboard");
            console::display_message("[1] Sales by Date");
            console::display_message("[2] Menu Items Sold by Date");
            console::display_message("[3] Upcoming Bookings");
            console::display_message("[4] Shutdown");
            console::display_message("[E] Back");

            let Some(choice) = console::prompt("Select an option") else {
                return Signal::Continue;
            };
            match choice.to_lowercase().as_str() {
                "1" => self.show_date_report(reports::sales_report),
                "2" => self.show_date_report(reports::items_sold_report),
                "3" => self.show_upcoming_bookings(),
                "4" => return Signal::Shutdown,
                "e" => return Signal::Continue,
                _ => self.invalid_selection(),
            }
        }
    }

    fn show_date_report(&self, report: fn(&[InvoiceRecord], NaiveDate) -> String) {
        let Some(raw_date) = console::prompt("Date (DD/MM/YYYY)") else {
            return;
        };
        let Some(date) = reports::parse_report_date(&raw_date) else {
            console::display_message("[ERROR] Please enter a valid date in DD/MM/YYYY format.");
            self.pause();
            return;
        };
        let history: Vec<InvoiceRecord> = JsonStore::new(self.config.order_history_path()).read();
        console::display_message(&report(&history, date));
        self.pause();
    }

    fn show_upcoming_bookings(&self) {
        let reservations: Vec<ReservationRecord> =
            JsonStore::new(self.config.reservations_path()).read();
        console::display_message(&reports::upcoming_reservations_report(
            &reservations,
            Local::now().naive_local(),
        ));
        self.pause();
    }

    // ----- helpers -----

    fn invalid_selection(&self) {
        console::display_message("[ERROR] Invalid selection. Please try again.");
        self.pause();
    }

    fn pause(&self) {
        let _ = console::prompt("Press Enter to continue");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CartAction {
    Back,
    Pay,
    Cancel,
}
