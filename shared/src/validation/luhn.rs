//! Luhn checksum for card numbers

/// Run the Luhn check over a numeric string.
///
/// Walking right to left, digits in odd positions are summed as-is and
/// digits in even positions are doubled (subtracting 9 when the double
/// exceeds 9). The number passes when the sum is divisible by ten.
/// Any non-digit character fails closed; so does the empty string.
pub fn checksum(card_number: &str) -> bool {
    if card_number.is_empty() {
        return false;
    }

    let mut sum: u32 = 0;
    for (pos, ch) in card_number.chars().rev().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        if pos % 2 == 1 {
            let doubled = digit * 2;
            sum += if doubled > 9 { doubled - 9 } else { doubled };
        } else {
            sum += digit;
        }
    }
    sum % 10 == 0
}
