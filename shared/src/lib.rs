//! Shared types for the POS terminal
//!
//! Domain records, the order-type variants, the validation library and
//! the unified error type used across the workspace. Everything here is
//! pure data and pure functions; I/O lives in the application crate.

pub mod error;
pub mod models;
pub mod order_type;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{PosError, PosResult};
pub use order_type::{DeliveryDetails, DineInDetails, OrderDetails, OrderType, TakeawayDetails};
pub use serde::{Deserialize, Serialize};
