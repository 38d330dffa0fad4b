// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for search results.
//!
//! Colors only when stdout is a terminal and `NO_COLOR` is unset, so piping
//! results into another tool gets plain lines.

use std::io::IsTerminal;
use std::sync::OnceLock;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

static USE_COLORS: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| {
        // Respect NO_COLOR standard
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// One result line: rank, record id, record text.
pub fn result_line(rank: usize, id: usize, record: &str) -> String {
    let label = pad_left(&styled(&[DIM], &format!("{}.", rank + 1)), 4);
    let id = styled(&[DIM], &format!("[{id}]"));
    let record = if rank == 0 {
        styled(&[BOLD], record)
    } else {
        record.to_string()
    };
    format!("{label} {record} {id}")
}

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: f64) -> String {
    let text = format!("{value:.3} ms");
    let color = if value < 5.0 {
        GREEN
    } else if value < 20.0 {
        YELLOW
    } else {
        RED
    };
    styled(&[color], &text)
}
