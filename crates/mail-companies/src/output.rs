//! Run summary formatting for the terminal.

use serde::Serialize;
use std::io::IsTerminal;

/// Whether summary lines on stderr should be colored.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Never emits escape codes.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// One aligned `symbol label value` line.
pub fn format_check(symbol: &str, label: &str, value: &str) -> String {
    format!("    {symbol} {label:<12} {value}")
}

/// Print a check line to stderr.
pub fn print_check(symbol: &str, label: &str, value: &str) {
    eprintln!("{}", format_check(symbol, label, value));
}

/// Format bytes into human-readable size (e.g., "28.7 MB").
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Print a value as pretty JSON on stdout. Field order is preserved.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_plain_styling() {
        let s = Styled::plain();
        assert_eq!(s.ok_sym(), "OK");
        assert_eq!(s.bold("Acme"), "Acme");
        assert_eq!(s.green("done"), "done");
    }

    #[test]
    fn test_format_check_alignment() {
        assert_eq!(
            format_check("OK", "Messages:", "3"),
            "    OK Messages:    3"
        );
    }
}
