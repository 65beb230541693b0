//! Reservation book record

use serde::{Deserialize, Serialize};

/// One confirmed table booking, appended to the reservation store.
///
/// Never mutated after creation; reports later filter the book down to
/// future timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationRecord {
    /// `DD/MM/YYYY`
    pub date: String,
    /// 24-hour `HH:MM`, within opening hours
    pub time: String,
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    /// 1..=20
    pub party_size: u32,
    /// Free text, may be empty
    #[serde(default)]
    pub accommodations: String,
}
