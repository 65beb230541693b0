//! Staff PIN gate for the employee dashboard

/// Exact match against the configured PIN; surrounding whitespace on the
/// entry is forgiven, nothing else is.
pub fn pin_matches(entered: &str, configured: &str) -> bool {
    entered.trim() == configured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pin_passes() {
        assert!(pin_matches("1234", "1234"));
        assert!(pin_matches(" 1234 ", "1234"));
    }

    #[test]
    fn wrong_pin_fails() {
        assert!(!pin_matches("0000", "1234"));
        assert!(!pin_matches("12345", "1234"));
        assert!(!pin_matches("", "1234"));
    }
}
