//! Order type discriminant and per-variant detail payloads
//!
//! The order kind is fixed at construction. Conditional fields (table
//! number vs. contact and delivery data) live in a payload struct per
//! variant, so logic switches on the discriminant instead of probing for
//! attribute presence.

use crate::error::{PosError, PosResult};
use serde::{Deserialize, Serialize};

/// Order service type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    /// Resolve a numbered menu selection into an order type.
    ///
    /// Selection tokens match the ordering screen: `1` Dine-In,
    /// `2` Takeaway, `3` Delivery. Anything else is a contract violation
    /// by the caller.
    pub fn from_selection(selection: &str) -> PosResult<Self> {
        match selection {
            "1" => Ok(Self::DineIn),
            "2" => Ok(Self::Takeaway),
            "3" => Ok(Self::Delivery),
            other => Err(PosError::InvalidOrderType(other.to_string())),
        }
    }

    /// Display label used on screens and in persisted records
    pub fn label(&self) -> &'static str {
        match self {
            Self::DineIn => "Dine-In",
            Self::Takeaway => "Takeaway",
            Self::Delivery => "Delivery",
        }
    }

    /// Whether this order type collects customer contact details
    pub fn takes_contact(&self) -> bool {
        matches!(self, Self::Takeaway | Self::Delivery)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields collected for a dine-in order
#[derive(Debug, Clone, Default)]
pub struct DineInDetails {
    pub table_number: String,
}

/// Fields collected for a takeaway order
#[derive(Debug, Clone, Default)]
pub struct TakeawayDetails {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
}

/// Fields collected for a delivery order
#[derive(Debug, Clone)]
pub struct DeliveryDetails {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    pub suburb: String,
    pub postal_code: String,
    pub delivery_fee: f64,
}

impl DeliveryDetails {
    pub fn with_fee(delivery_fee: f64) -> Self {
        Self {
            name: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            address: String::new(),
            suburb: String::new(),
            postal_code: String::new(),
            delivery_fee,
        }
    }
}

/// Tagged per-variant payload carried by an order
#[derive(Debug, Clone)]
pub enum OrderDetails {
    DineIn(DineInDetails),
    Takeaway(TakeawayDetails),
    Delivery(DeliveryDetails),
}

impl OrderDetails {
    /// Build the empty payload for an order type
    pub fn new(order_type: OrderType, delivery_fee: f64) -> Self {
        match order_type {
            OrderType::DineIn => Self::DineIn(DineInDetails::default()),
            OrderType::Takeaway => Self::Takeaway(TakeawayDetails::default()),
            OrderType::Delivery => Self::Delivery(DeliveryDetails::with_fee(delivery_fee)),
        }
    }

    pub fn order_type(&self) -> OrderType {
        match self {
            Self::DineIn(_) => OrderType::DineIn,
            Self::Takeaway(_) => OrderType::Takeaway,
            Self::Delivery(_) => OrderType::Delivery,
        }
    }

    /// Delivery fee added to the order total, zero unless Delivery
    pub fn delivery_fee(&self) -> f64 {
        match self {
            Self::Delivery(d) => d.delivery_fee,
            _ => 0.0,
        }
    }
}
