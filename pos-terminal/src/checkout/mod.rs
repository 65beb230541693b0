//! Checkout / payment state machine
//!
//! A resumable, field-at-a-time collection flow over payment details and
//! the order-type-conditional contact, delivery or table fields. The
//! transition logic is pure: [`CheckoutFlow::submit`] takes one raw input
//! line and moves the machine; the console layer only renders prompts
//! and read-backs.
//!
//! States: `CollectingFields -> ReadyToConfirm -> {Paid | Aborted}`.
//! The escape token aborts from any field; an aborted or declined flow
//! discards the whole payment object, never retrying individual fields.

use crate::orders::Order;
use shared::util::tidy_name;
use shared::{OrderDetails, OrderType, validation};

/// Escape token accepted at any prompt
const ESCAPE_TOKEN: &str = "e";
/// Token finalizing payment on the confirmation screen
const PAY_TOKEN: &str = "p";

/// Machine state. `Paid` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    CollectingFields,
    ReadyToConfirm,
    Paid,
    Aborted,
}

/// One collectable field, in fixed priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardNumber,
    ExpirationDate,
    Cvv,
    CardholderName,
    ContactName,
    MobileNumber,
    Email,
    Address,
    Suburb,
    PostalCode,
    TableNumber,
    Note,
}

impl Field {
    /// Prompt label shown next to the input
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::ExpirationDate => "Expiration Date (MM/YY)",
            Self::Cvv => "CVV",
            Self::CardholderName => "Cardholder Name",
            Self::ContactName => "Name",
            Self::MobileNumber => "Mobile Number",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Suburb => "Suburb",
            Self::PostalCode => "Postal Code",
            Self::TableNumber => "Table Number",
            Self::Note => "Note (if any)",
        }
    }

    /// Screen section this field is rendered under
    pub fn section(&self) -> &'static str {
        match self {
            Self::CardNumber | Self::ExpirationDate | Self::Cvv | Self::CardholderName => {
                "Payment Method"
            }
            Self::ContactName | Self::MobileNumber | Self::Email => "Contact Information",
            Self::Address | Self::Suburb | Self::PostalCode => "Delivery Address",
            Self::TableNumber => "Table Information",
            Self::Note => "",
        }
    }
}

/// Required fields for an order type, in collection order.
///
/// The payment block always comes first; the conditional block depends
/// on the discriminant. The optional note is not part of completeness.
fn required_fields(order_type: OrderType) -> &'static [Field] {
    use Field::*;
    match order_type {
        OrderType::DineIn => &[CardNumber, ExpirationDate, Cvv, CardholderName, TableNumber],
        OrderType::Takeaway => &[
            CardNumber,
            ExpirationDate,
            Cvv,
            CardholderName,
            ContactName,
            MobileNumber,
            Email,
        ],
        OrderType::Delivery => &[
            CardNumber,
            ExpirationDate,
            Cvv,
            CardholderName,
            ContactName,
            MobileNumber,
            Email,
            Address,
            Suburb,
            PostalCode,
        ],
    }
}

/// Transient payment fields; only a masked card number survives into the
/// persisted invoice
#[derive(Debug, Clone, Default)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    pub note: String,
}

/// Result of feeding one input line while collecting fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field committed, more to collect
    Committed,
    /// Validator rejected the input; a message awaits redisplay
    Rejected,
    /// Escape token; the flow is dead
    Aborted,
    /// Everything collected, machine moved to `ReadyToConfirm`
    FieldsComplete,
}

/// Result of the confirmation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Paid,
    Aborted,
    /// Unrecognized token, re-prompt
    Rejected,
}

/// The checkout machine. Owns the order for the duration of payment.
#[derive(Debug)]
pub struct CheckoutFlow {
    order: Order,
    payment: PaymentDetails,
    state: CheckoutState,
    message: Option<String>,
    note_taken: bool,
}

impl CheckoutFlow {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            payment: PaymentDetails::default(),
            state: CheckoutState::CollectingFields,
            message: None,
            note_taken: false,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn payment(&self) -> &PaymentDetails {
        &self.payment
    }

    /// One-shot redisplay message from the last rejected input
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    /// Completeness predicate for the current order type, re-evaluated
    /// from field state on every call
    pub fn is_complete(&self) -> bool {
        required_fields(self.order.order_type())
            .iter()
            .all(|field| !self.value_of(*field).is_empty())
    }

    /// The next field to prompt for: the first unset required field,
    /// then the unvalidated note, then nothing
    pub fn next_field(&self) -> Option<Field> {
        for field in required_fields(self.order.order_type()) {
            if self.value_of(*field).is_empty() {
                return Some(*field);
            }
        }
        if self.note_taken { None } else { Some(Field::Note) }
    }

    /// Fields already committed, with their values, in priority order.
    /// Rendered as read-back confirmation above the active prompt.
    pub fn committed_fields(&self) -> Vec<(Field, String)> {
        required_fields(self.order.order_type())
            .iter()
            .map(|field| (*field, self.value_of(*field).to_string()))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Feed one raw input line to the collector.
    ///
    /// The escape token aborts immediately (no partial state persists —
    /// the caller drops the flow). A validator pass commits the field; a
    /// failure stores a redisplay message and changes nothing.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        debug_assert_eq!(self.state, CheckoutState::CollectingFields);
        let Some(field) = self.next_field() else {
            self.state = CheckoutState::ReadyToConfirm;
            return SubmitOutcome::FieldsComplete;
        };

        // The note is captured unconditionally, escape token included
        if field != Field::Note && raw.eq_ignore_ascii_case(ESCAPE_TOKEN) {
            self.state = CheckoutState::Aborted;
            tracing::debug!(order_id = %self.order.order_id(), "Checkout aborted during field collection");
            return SubmitOutcome::Aborted;
        }

        match Self::validate(field, raw) {
            Ok(value) => {
                self.set_value(field, value);
                if self.next_field().is_none() {
                    self.state = CheckoutState::ReadyToConfirm;
                    SubmitOutcome::FieldsComplete
                } else {
                    SubmitOutcome::Committed
                }
            }
            Err(message) => {
                self.message = Some(message);
                SubmitOutcome::Rejected
            }
        }
    }

    /// Confirmation screen input: pay token finalizes, escape token
    /// abandons the whole payment, anything else re-prompts.
    pub fn confirm(&mut self, raw: &str) -> ConfirmOutcome {
        debug_assert_eq!(self.state, CheckoutState::ReadyToConfirm);
        if raw.eq_ignore_ascii_case(PAY_TOKEN) {
            self.state = CheckoutState::Paid;
            tracing::info!(order_id = %self.order.order_id(), "Payment finalized");
            ConfirmOutcome::Paid
        } else if raw.eq_ignore_ascii_case(ESCAPE_TOKEN) {
            self.state = CheckoutState::Aborted;
            tracing::debug!(order_id = %self.order.order_id(), "Payment declined at confirmation");
            ConfirmOutcome::Aborted
        } else {
            self.message = Some("Invalid Input. Please try again.".to_string());
            ConfirmOutcome::Rejected
        }
    }

    /// Card number with all but the last four characters masked,
    /// original length preserved
    pub fn masked_card_number(&self) -> String {
        mask_card_number(&self.payment.card_number)
    }

    fn validate(field: Field, raw: &str) -> Result<String, String> {
        match field {
            Field::CardNumber => {
                if validation::valid_card_number(raw) {
                    Ok(raw.to_string())
                } else {
                    Err("Invalid Input. Card number invalid.".to_string())
                }
            }
            Field::ExpirationDate => {
                if validation::valid_expiration_date(raw) {
                    Ok(raw.to_string())
                } else {
                    Err("Invalid Input. Date invalid.".to_string())
                }
            }
            Field::Cvv => {
                if validation::valid_cvv(raw) {
                    Ok(raw.to_string())
                } else {
                    Err("Invalid Input. CVV invalid.".to_string())
                }
            }
            Field::CardholderName | Field::ContactName => {
                if validation::valid_name(raw) {
                    Ok(tidy_name(raw))
                } else {
                    Err("Invalid Input. Name must contain only letters and spaces.".to_string())
                }
            }
            Field::MobileNumber => {
                if validation::valid_mobile_number(raw) {
                    Ok(raw.to_string())
                } else {
                    Err(
                        "Invalid Input. Mobile number must start with 04 and only contain 10 digits."
                            .to_string(),
                    )
                }
            }
            Field::Email => {
                if validation::valid_email(raw) {
                    Ok(raw.to_string())
                } else {
                    Err("Invalid Input. Email must be valid.".to_string())
                }
            }
            Field::Address => {
                if raw.trim().is_empty() {
                    Err("Invalid Input. Address cannot be empty.".to_string())
                } else {
                    Ok(tidy_name(raw))
                }
            }
            Field::Suburb => {
                if raw.trim().is_empty() {
                    Err("Invalid Input. Suburb cannot be empty.".to_string())
                } else {
                    Ok(tidy_name(raw))
                }
            }
            Field::PostalCode => {
                if validation::valid_postal_code(raw) {
                    Ok(raw.to_string())
                } else {
                    Err("Invalid Input. Postal code must be 4 digits.".to_string())
                }
            }
            Field::TableNumber => {
                if validation::valid_table_number(raw) {
                    Ok(raw.to_string())
                } else {
                    Err("Invalid Input. Please enter a valid table number (1-100).".to_string())
                }
            }
            Field::Note => Ok(raw.to_string()),
        }
    }

    /// Current committed value of a field; empty string means unset
    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.payment.card_number,
            Field::ExpirationDate => &self.payment.expiration_date,
            Field::Cvv => &self.payment.cvv,
            Field::CardholderName => &self.payment.cardholder_name,
            Field::Note => &self.payment.note,
            Field::ContactName => match self.order.details() {
                OrderDetails::Takeaway(d) => &d.name,
                OrderDetails::Delivery(d) => &d.name,
                OrderDetails::DineIn(_) => "",
            },
            Field::MobileNumber => match self.order.details() {
                OrderDetails::Takeaway(d) => &d.mobile_number,
                OrderDetails::Delivery(d) => &d.mobile_number,
                OrderDetails::DineIn(_) => "",
            },
            Field::Email => match self.order.details() {
                OrderDetails::Takeaway(d) => &d.email,
                OrderDetails::Delivery(d) => &d.email,
                OrderDetails::DineIn(_) => "",
            },
            Field::Address => match self.order.details() {
                OrderDetails::Delivery(d) => &d.address,
                _ => "",
            },
            Field::Suburb => match self.order.details() {
                OrderDetails::Delivery(d) => &d.suburb,
                _ => "",
            },
            Field::PostalCode => match self.order.details() {
                OrderDetails::Delivery(d) => &d.postal_code,
                _ => "",
            },
            Field::TableNumber => match self.order.details() {
                OrderDetails::DineIn(d) => &d.table_number,
                _ => "",
            },
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::CardNumber => self.payment.card_number = value,
            Field::ExpirationDate => self.payment.expiration_date = value,
            Field::Cvv => self.payment.cvv = value,
            Field::CardholderName => self.payment.cardholder_name = value,
            Field::Note => {
                self.payment.note = value;
                self.note_taken = true;
            }
            Field::ContactName => match self.order.details_mut() {
                OrderDetails::Takeaway(d) => d.name = value,
                OrderDetails::Delivery(d) => d.name = value,
                OrderDetails::DineIn(_) => {}
            },
            Field::MobileNumber => match self.order.details_mut() {
                OrderDetails::Takeaway(d) => d.mobile_number = value,
                OrderDetails::Delivery(d) => d.mobile_number = value,
                OrderDetails::DineIn(_) => {}
            },
            Field::Email => match self.order.details_mut() {
                OrderDetails::Takeaway(d) => d.email = value,
                OrderDetails::Delivery(d) => d.email = value,
                OrderDetails::DineIn(_) => {}
            },
            Field::Address => {
                if let OrderDetails::Delivery(d) = self.order.details_mut() {
                    d.address = value;
                }
            }
            Field::Suburb => {
                if let OrderDetails::Delivery(d) = self.order.details_mut() {
                    d.suburb = value;
                }
            }
            Field::PostalCode => {
                if let OrderDetails::Delivery(d) = self.order.details_mut() {
                    d.postal_code = value;
                }
            }
            Field::TableNumber => {
                if let OrderDetails::DineIn(d) = self.order.details_mut() {
                    d.table_number = value;
                }
            }
        }
    }
}

/// Replace all but the last four characters with `*`, preserving length
pub fn mask_card_number(card_number: &str) -> String {
    let keep_from = card_number.chars().count().saturating_sub(4);
    card_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < keep_from { '*' } else { c })
        .collect()
}
