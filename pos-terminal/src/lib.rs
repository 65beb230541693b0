//! Console point-of-sale and reservation terminal
//!
//! Single-threaded, strictly sequential: every suspension point is one
//! blocking line read. The state machines in [`checkout`] and
//! [`reservations`] are pure transition functions; [`console`] and
//! [`shell`] feed them raw input and render their messages.

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod console;
pub mod core;
pub mod invoice;
pub mod orders;
pub mod reports;
pub mod reservations;
pub mod shell;
pub mod storage;

pub use core::config::Config;
pub use core::setup_environment;
