//! Input validation library
//!
//! Pure predicates over raw user input. Each validator answers one
//! question about one string; none of them touch process state, so the
//! prompt loops can call them on every keystroke of a resumable flow.
//!
//! Two deliberately different time rules live here: card expiry is
//! compared against the current *moment*, while reservation dates are
//! compared against the current *calendar day*.

pub mod luhn;

use chrono::{Local, NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Default opening hour for reservations
pub const DEFAULT_OPENING: &str = "09:00";
/// Default closing hour for reservations
pub const DEFAULT_CLOSING: &str = "21:00";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("static pattern"));
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^04\d{8}$").expect("static pattern"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static pattern")
});
static CVV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("static pattern"));
static POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").expect("static pattern"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("static pattern"));

/// Letters and whitespace only, non-empty
pub fn valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Parses as `DD/MM/YYYY`
pub fn valid_date(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").is_ok()
}

/// Parses as `DD/MM/YYYY` and falls strictly after today (calendar-day
/// comparison; today itself is rejected)
pub fn valid_future_date(raw: &str) -> bool {
    match NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        Ok(date) => date > Local::now().date_naive(),
        Err(_) => false,
    }
}

/// 24-hour `HH:MM` within the inclusive `[open, close]` window
pub fn valid_time_between(raw: &str, open: NaiveTime, close: NaiveTime) -> bool {
    match NaiveTime::parse_from_str(raw, "%H:%M") {
        Ok(time) => open <= time && time <= close,
        Err(_) => false,
    }
}

/// `HH:MM` within the default opening hours (09:00-21:00)
pub fn valid_time(raw: &str) -> bool {
    let open = NaiveTime::parse_from_str(DEFAULT_OPENING, "%H:%M").expect("static time");
    let close = NaiveTime::parse_from_str(DEFAULT_CLOSING, "%H:%M").expect("static time");
    valid_time_between(raw, open, close)
}

/// Exactly ten digits with the fixed `04` prefix
pub fn valid_mobile_number(raw: &str) -> bool {
    MOBILE_RE.is_match(raw)
}

/// `local@domain.tld` shape
pub fn valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// Passes the Luhn checksum; any non-digit fails closed
pub fn valid_card_number(raw: &str) -> bool {
    luhn::checksum(raw)
}

/// `MM/YY` strictly after the current moment.
///
/// The expiry parses to the first instant of its month, so a card
/// expiring this month is already rejected.
pub fn valid_expiration_date(raw: &str) -> bool {
    if !EXPIRY_RE.is_match(raw) {
        return false;
    }
    // Prepend a day so chrono's %y century mapping applies
    match NaiveDate::parse_from_str(&format!("01/{raw}"), "%d/%m/%y") {
        Ok(date) => match date.and_hms_opt(0, 0, 0) {
            Some(moment) => moment > Local::now().naive_local(),
            None => false,
        },
        Err(_) => false,
    }
}

/// Three or four digits
pub fn valid_cvv(raw: &str) -> bool {
    CVV_RE.is_match(raw)
}

/// Exactly four digits
pub fn valid_postal_code(raw: &str) -> bool {
    POSTAL_RE.is_match(raw)
}

/// Integer in `[1, 100]`
pub fn valid_table_number(raw: &str) -> bool {
    matches!(raw.parse::<u32>(), Ok(n) if (1..=100).contains(&n))
        && raw.chars().all(|c| c.is_ascii_digit())
}

/// Integer in `[1, 20]`
pub fn valid_party_size(raw: &str) -> bool {
    matches!(raw.parse::<u32>(), Ok(n) if (1..=20).contains(&n))
        && raw.chars().all(|c| c.is_ascii_digit())
}
