//! Order aggregate
//!
//! The in-memory cart: line items over catalog entries plus the
//! type-specific detail payload. Totals are derived on demand and never
//! cached; an abandoned order is simply dropped, nothing is persisted
//! until an invoice snapshot is taken at payment time.

pub mod money;

use crate::catalog::MenuCatalog;
use money::{round_money, to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::MenuItem;
use shared::{OrderDetails, OrderType, PosError, PosResult};
use std::rc::Rc;
use uuid::Uuid;

/// One catalog entry plus a quantity.
///
/// Within an order there is at most one line per catalog id; adding the
/// same item again merges into the existing line.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub item: Rc<MenuItem>,
    pub quantity: u32,
}

impl LineItem {
    /// unit price * quantity, rounded to 2 dp
    pub fn line_total(&self) -> Decimal {
        round_money(to_decimal(self.item.price) * Decimal::from(self.quantity))
    }
}

/// Derived totals, recomputed on every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub order_total: f64,
}

/// The order under construction
#[derive(Debug)]
pub struct Order {
    order_id: String,
    details: OrderDetails,
    items: Vec<LineItem>,
    catalog: Rc<MenuCatalog>,
}

impl Order {
    /// Create an empty order of the given type bound to the catalog
    pub fn new(order_type: OrderType, catalog: Rc<MenuCatalog>, delivery_fee: f64) -> Self {
        Self {
            order_id: Uuid::new_v4().to_string(),
            details: OrderDetails::new(order_type, delivery_fee),
            items: Vec::new(),
            catalog,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn order_type(&self) -> OrderType {
        self.details.order_type()
    }

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut OrderDetails {
        &mut self.details
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of the catalog item at the 1-based menu index.
    ///
    /// Merges into an existing line for the same catalog id, otherwise
    /// appends a new line (first-seen order is the display order).
    pub fn add_item(&mut self, catalog_index: usize, quantity: u32) -> PosResult<()> {
        let item = self.catalog.item_at(catalog_index)?;
        if quantity < 1 {
            return Err(PosError::InvalidQuantity);
        }

        match self.items.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += quantity,
            None => self.items.push(LineItem { item, quantity }),
        }
        Ok(())
    }

    /// Remove `quantity` units from the line at the 1-based cart index.
    ///
    /// The line disappears when its quantity reaches zero. Returns a
    /// confirmation string for the cart screen.
    pub fn remove_item(&mut self, line_index: usize, quantity: u32) -> PosResult<String> {
        if line_index < 1 || line_index > self.items.len() {
            return Err(PosError::InvalidIndex);
        }
        let line = &mut self.items[line_index - 1];
        if quantity < 1 || quantity > line.quantity {
            return Err(PosError::InvalidQuantity);
        }

        line.quantity -= quantity;
        let name = line.item.name.clone();
        if line.quantity == 0 {
            self.items.remove(line_index - 1);
        }
        Ok(format!("{name} (x{quantity}) removed"))
    }

    /// Recompute subtotal and total. Idempotent; the delivery fee is
    /// added only for delivery orders.
    pub fn totals(&self) -> OrderTotals {
        let subtotal: Decimal = self.items.iter().map(LineItem::line_total).sum();
        let fee = to_decimal(self.details.delivery_fee());
        let total = subtotal + fee;
        OrderTotals {
            subtotal: to_f64(subtotal),
            delivery_fee: to_f64(fee),
            order_total: to_f64(total),
        }
    }
}

#[cfg(test)]
mod tests;
