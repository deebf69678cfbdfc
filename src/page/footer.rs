//! Footer copyright line.

use chrono::Datelike;

pub const FOOTER_TEMPLATE: &str = "© 2024 Skyhop. All rights reserved.";

/// Replace the first four-digit run in a copyright line with `year`.
///
/// Lines without a `©` are returned unchanged.
pub fn refresh_copyright_year(text: &str, year: i32) -> String {
    if !text.contains('©') {
        return text.to_string();
    }
    let bytes = text.as_bytes();
    let start = (0..bytes.len().saturating_sub(3))
        .find(|&i| bytes[i..i + 4].iter().all(u8::is_ascii_digit));
    match start {
        Some(i) => format!("{}{}{}", &text[..i], year, &text[i + 4..]),
        None => text.to_string(),
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// The footer line for today.
pub fn footer_line() -> String {
    refresh_copyright_year(FOOTER_TEMPLATE, current_year())
}
