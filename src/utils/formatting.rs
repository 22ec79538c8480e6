//! Formatting utilities used for CLI and slip outputs.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(fill))
}

/// Money amounts: whole numbers without decimals, otherwise two decimals.
pub fn amount(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Leave units always carry one decimal (0.0, 1.5, ...).
pub fn units(v: f64) -> String {
    format!("{v:.1}")
}
