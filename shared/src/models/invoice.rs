//! Invoice snapshot records
//!
//! The immutable shape persisted once payment is finalized. One copy is
//! written per order (the kitchen display interface) and one is appended
//! to the order history. Order-type-conditional blocks are optional
//! fields skipped during serialization when absent.

use serde::{Deserialize, Serialize};

/// Copy of one order line at the moment of payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    /// Unit price at time of sale
    pub price: f64,
    /// price * quantity, rounded to 2 dp
    pub total_price: f64,
}

/// Masked payment details carried on the invoice.
///
/// The card number is stored masked (all but the last four characters
/// replaced, original length preserved); the raw number never reaches a
/// store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    #[serde(default)]
    pub note: String,
}

/// Contact block for takeaway and delivery orders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInformation {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
}

/// Delivery destination block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryAddress {
    pub address: String,
    pub suburb: String,
    pub postal_code: String,
}

/// The full invoice snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceRecord {
    /// `YYYY-MM-DD HH:MM:SS`
    pub date_time: String,
    pub order_id: String,
    /// Display label of the order type ("Dine-In" | "Takeaway" | "Delivery")
    pub order_type: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    /// Zero when the order was not a delivery
    #[serde(default)]
    pub delivery_fee: f64,
    pub order_total: f64,
    pub payment_info: PaymentInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<ContactInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
}
