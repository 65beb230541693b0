use chrono::NaiveTime;
use std::path::PathBuf;

/// Terminal configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | POS_DATA_DIR | . | Directory holding the JSON stores |
/// | POS_STAFF_PIN | 1234 | PIN gating the staff dashboard |
/// | POS_DELIVERY_FEE | 9.99 | Flat fee added to delivery orders |
/// | POS_OPENING_TIME | 09:00 | Earliest reservation time |
/// | POS_CLOSING_TIME | 21:00 | Latest reservation time |
/// | POS_LOG_DIR | (unset) | Daily-rolling log directory |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding menu.json, order_history.json, reservations.json
    /// and the per-order invoices/ directory
    pub data_dir: PathBuf,
    /// Staff dashboard PIN
    pub staff_pin: String,
    /// Flat delivery fee
    pub delivery_fee: f64,
    /// Reservation window start
    pub opening_time: NaiveTime,
    /// Reservation window end
    pub closing_time: NaiveTime,
    /// Log directory; logging stays off the interactive screen
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("POS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            staff_pin: std::env::var("POS_STAFF_PIN").unwrap_or_else(|_| "1234".into()),
            delivery_fee: std::env::var("POS_DELIVERY_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(9.99),
            opening_time: std::env::var("POS_OPENING_TIME")
                .ok()
                .and_then(|v| NaiveTime::parse_from_str(&v, "%H:%M").ok())
                .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()),
            closing_time: std::env::var("POS_CLOSING_TIME")
                .ok()
                .and_then(|v| NaiveTime::parse_from_str(&v, "%H:%M").ok())
                .unwrap_or_else(|| NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default()),
            log_dir: std::env::var("POS_LOG_DIR").ok(),
        }
    }

    /// Path of the menu source file
    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join("menu.json")
    }

    /// Path of the append-only order history
    pub fn order_history_path(&self) -> PathBuf {
        self.data_dir.join("order_history.json")
    }

    /// Path of the reservation book
    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join("reservations.json")
    }

    /// Per-order invoice record, the kitchen display interface
    pub fn invoice_path(&self, order_id: &str) -> PathBuf {
        self.data_dir.join("invoices").join(format!("{order_id}.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            staff_pin: "1234".into(),
            delivery_fee: 9.99,
            opening_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            closing_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
            log_dir: None,
        }
    }
}
