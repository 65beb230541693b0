//! Persisted record types
//!
//! Serde models for the flat-file stores: the menu source, the invoice
//! snapshot written to the order history and kitchen display, and the
//! reservation book.

mod invoice;
mod menu_item;
mod reservation;

pub use invoice::{ContactInformation, DeliveryAddress, InvoiceItem, InvoiceRecord, PaymentInfo};
pub use menu_item::MenuItem;
pub use reservation::ReservationRecord;
