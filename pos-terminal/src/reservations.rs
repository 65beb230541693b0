//! Reservation flow
//!
//! The table-booking counterpart of the checkout machine: the same
//! resumable field-at-a-time collection over date, time, contact details
//! and party size, then an explicit confirm step that appends the record
//! to the reservation book.

use crate::storage::JsonStore;
use chrono::NaiveTime;
use shared::models::ReservationRecord;
use shared::util::tidy_name;
use shared::{PosResult, validation};

const ESCAPE_TOKEN: &str = "e";
const CONFIRM_TOKEN: &str = "c";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationState {
    CollectingFields,
    ReadyToConfirm,
    Confirmed,
    Cancelled,
}

/// Collection order is fixed; accommodations come last and are optional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    Date,
    Time,
    Name,
    MobileNumber,
    Email,
    PartySize,
    Accommodations,
}

impl ReservationField {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Date => "Date (DD/MM/YYYY)",
            Self::Time => "Time (HH:MM)",
            Self::Name => "Name",
            Self::MobileNumber => "Mobile Number",
            Self::Email => "Email",
            Self::PartySize => "Party Size (1-20)",
            Self::Accommodations => "Accommodations (optional)",
        }
    }
}

const REQUIRED: &[ReservationField] = &[
    ReservationField::Date,
    ReservationField::Time,
    ReservationField::Name,
    ReservationField::MobileNumber,
    ReservationField::Email,
    ReservationField::PartySize,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed,
    Rejected,
    Aborted,
    FieldsComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
    Rejected,
}

/// The reservation machine
#[derive(Debug)]
pub struct ReservationFlow {
    date: String,
    time: String,
    name: String,
    mobile_number: String,
    email: String,
    /// Zero until committed; validated range is 1..=20
    party_size: u32,
    accommodations: String,
    accommodations_taken: bool,
    state: ReservationState,
    message: Option<String>,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
}

impl ReservationFlow {
    pub fn new(opening_time: NaiveTime, closing_time: NaiveTime) -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            name: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            party_size: 0,
            accommodations: String::new(),
            accommodations_taken: false,
            state: ReservationState::CollectingFields,
            message: None,
            opening_time,
            closing_time,
        }
    }

    pub fn state(&self) -> ReservationState {
        self.state
    }

    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn value_of(&self, field: ReservationField) -> String {
        match field {
            ReservationField::Date => self.date.clone(),
            ReservationField::Time => self.time.clone(),
            ReservationField::Name => self.name.clone(),
            ReservationField::MobileNumber => self.mobile_number.clone(),
            ReservationField::Email => self.email.clone(),
            ReservationField::PartySize => {
                if self.party_size == 0 {
                    String::new()
                } else {
                    self.party_size.to_string()
                }
            }
            ReservationField::Accommodations => self.accommodations.clone(),
        }
    }

    pub fn next_field(&self) -> Option<ReservationField> {
        for field in REQUIRED {
            if self.value_of(*field).is_empty() {
                return Some(*field);
            }
        }
        if self.accommodations_taken {
            None
        } else {
            Some(ReservationField::Accommodations)
        }
    }

    /// Committed fields with values, for read-back above the prompt
    pub fn committed_fields(&self) -> Vec<(ReservationField, String)> {
        REQUIRED
            .iter()
            .map(|field| (*field, self.value_of(*field)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Feed one input line while collecting fields
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        debug_assert_eq!(self.state, ReservationState::CollectingFields);
        let Some(field) = self.next_field() else {
            self.state = ReservationState::ReadyToConfirm;
            return SubmitOutcome::FieldsComplete;
        };

        if field != ReservationField::Accommodations && raw.eq_ignore_ascii_case(ESCAPE_TOKEN) {
            self.state = ReservationState::Cancelled;
            return SubmitOutcome::Aborted;
        }

        match self.validate_and_commit(field, raw) {
            Ok(()) => {
                if self.next_field().is_none() {
                    self.state = ReservationState::ReadyToConfirm;
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

    /// Confirmation screen: confirm token books, escape cancels
    pub fn confirm(&mut self, raw: &str) -> ConfirmOutcome {
        debug_assert_eq!(self.state, ReservationState::ReadyToConfirm);
        if raw.eq_ignore_ascii_case(CONFIRM_TOKEN) {
            self.state = ReservationState::Confirmed;
            ConfirmOutcome::Confirmed
        } else if raw.eq_ignore_ascii_case(ESCAPE_TOKEN) {
            self.state = ReservationState::Cancelled;
            ConfirmOutcome::Cancelled
        } else {
            self.message = Some("Invalid Input. Please try again.".to_string());
            ConfirmOutcome::Rejected
        }
    }

    /// The confirmed booking, ready for the reservation book
    pub fn record(&self) -> Option<ReservationRecord> {
        if self.state != ReservationState::Confirmed {
            return None;
        }
        Some(ReservationRecord {
            date: self.date.clone(),
            time: self.time.clone(),
            name: self.name.clone(),
            mobile_number: self.mobile_number.clone(),
            email: self.email.clone(),
            party_size: self.party_size,
            accommodations: self.accommodations.clone(),
        })
    }

    /// Append the confirmed booking to the store
    pub fn book(&self, store: &JsonStore) -> PosResult<()> {
        let Some(record) = self.record() else {
            return Err(shared::PosError::validation("reservation is not confirmed"));
        };
        store.append(record)?;
        tracing::info!(date = %self.date, time = %self.time, party = self.party_size, "Reservation booked");
        Ok(())
    }

    fn validate_and_commit(&mut self, field: ReservationField, raw: &str) -> Result<(), String> {
        match field {
            ReservationField::Date => {
                if validation::valid_future_date(raw) {
                    self.date = raw.to_string();
                    Ok(())
                } else {
                    Err("Please enter a valid date in the future in DD/MM/YYYY format.".to_string())
                }
            }
            ReservationField::Time => {
                if validation::valid_time_between(raw, self.opening_time, self.closing_time) {
                    self.time = raw.to_string();
                    Ok(())
                } else {
                    Err(format!(
                        "Please enter a time between opening hours ({} - {}).",
                        self.opening_time.format("%H:%M"),
                        self.closing_time.format("%H:%M")
                    ))
                }
            }
            ReservationField::Name => {
                if validation::valid_name(raw) {
                    self.name = tidy_name(raw);
                    Ok(())
                } else {
                    Err("Please enter a valid name.".to_string())
                }
            }
            ReservationField::MobileNumber => {
                if validation::valid_mobile_number(raw) {
                    self.mobile_number = raw.to_string();
                    Ok(())
                } else {
                    Err("Please enter a valid mobile number starting with 04.".to_string())
                }
            }
            ReservationField::Email => {
                if validation::valid_email(raw) {
                    self.email = raw.to_string();
                    Ok(())
                } else {
                    Err("Please enter a valid email address.".to_string())
                }
            }
            ReservationField::PartySize => {
                if validation::valid_party_size(raw) {
                    self.party_size = raw.parse().unwrap_or(0);
                    Ok(())
                } else {
                    Err("Please enter a valid party size (1-20).".to_string())
                }
            }
            ReservationField::Accommodations => {
                self.accommodations = raw.to_string();
                self.accommodations_taken = true;
                Ok(())
            }
        }
    }
}
