//! Console adapter
//!
//! The only module that touches the terminal. Everything above it works
//! on strings, so the flows and reports stay testable without a tty.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

const HEADING_WIDTH: usize = 50;

/// Wipe the screen and park the cursor top-left. Failures are logged
/// and swallowed; a dirty screen is not worth crashing a session over.
pub fn clear_screen() {
    if let Err(err) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
        tracing::warn!(%err, "Failed to clear the screen");
    }
}

/// Centered heading between dashed rules
pub fn heading(title: &str) {
    let rule = "-".repeat(HEADING_WIDTH);
    println!("{rule}");
    println!("{:^width$}", title, width = HEADING_WIDTH);
    println!("{rule}");
}

pub fn display_message(message: &str) {
    println!("{message}");
}

/// One trimmed line from stdin, or `None` once input is exhausted
pub fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            tracing::error!(%err, "Failed to read from stdin");
            None
        }
    }
}

/// Print a prompt on its own, then read the reply
pub fn prompt(label: &str) -> Option<String> {
    print!("{label}: ");
    if io::stdout().flush().is_err() {
        return None;
    }
    read_line()
}

#[cfg(test)]
mod tests {
    use super::HEADING_WIDTH;

    #[test]
    fn headings_center_within_the_rule_width() {
        let rendered = format!("{:^width$}", "Main Menu", width = HEADING_WIDTH);
        assert_eq!(rendered.len(), HEADING_WIDTH);
        assert_eq!(rendered.trim(), "Main Menu");
    }
}
