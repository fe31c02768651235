//! Terminal UI helpers for consistent output styling.

use std::env;
use std::io::IsTerminal;

/// ANSI color codes using true color (24-bit)
pub mod colors {
    pub const HEADER: &str = "\x1b[38;2;255;210;120m";
    pub const OK: &str = "\x1b[38;2;120;255;120m";
    pub const ERR: &str = "\x1b[38;2;255;100;100m";
    pub const DIM: &str = "\x1b[38;2;140;140;140m";
    pub const CYAN: &str = "\x1b[38;2;100;200;255m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Unicode symbols
pub mod symbols {
    pub const OK: &str = "✓";
    pub const ERR: &str = "✗";
    pub const ARROW: &str = "›";
    pub const PROGRESS_FULL: &str = "█";
    pub const PROGRESS_EMPTY: &str = "░";
}

/// Horizontal rule
pub const HR: &str =
    "──────────────────────────────────────────────────────────────────────────────";

/// Output styling switches, resolved once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    /// The ANSI code when color is on, empty otherwise.
    pub fn paint<'a>(&self, code: &'a str) -> &'a str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

/// Honor NO_COLOR and drop colors when stdout is not a terminal.
pub fn detect_style() -> Style {
    if env::var_os("NO_COLOR").is_some() {
        return Style { color: false };
    }
    Style {
        color: std::io::stdout().is_terminal(),
    }
}

/// Format a key-value line with alignment.
pub fn kv(key: &str, value: &str, key_width: usize) -> String {
    format!("  {:width$} {}", key, value, width = key_width)
}
