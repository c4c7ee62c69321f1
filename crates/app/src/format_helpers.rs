//! Shared formatting utilities for the UI layer.
//!
//! Dates are ISO `YYYY-MM-DD` strings; durations are whole seconds.

use chrono::{NaiveDate, Utc};

/// Render a duration as `MM:SS` below one hour and `H:MM:SS` above.
pub fn format_duration(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Render a millisecond span with [`format_duration`]. Spans beyond
/// `u32::MAX` seconds are shown saturated.
pub fn format_clock_ms(ms: u64) -> String {
    format_duration(u32::try_from(ms / 1000).unwrap_or(u32::MAX))
}

fn parse_iso(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.get(..10)?, "%Y-%m-%d").ok()
}

/// Format an ISO date as "Jun 15, 2024". Unparseable input is returned as-is.
pub fn format_date_human(date_str: &str) -> String {
    parse_iso(date_str)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Format an ISO date as "June 2024" for the profile card.
pub fn format_member_since(date_str: &str) -> String {
    parse_iso(date_str)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Today's date as an ISO string, stamped on fabricated accounts.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Group digits in threes: 8943 → "8,943".
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount: 45678 → "$45,678".
pub fn format_currency(dollars: u32) -> String {
    format!("${}", format_count(dollars))
}

/// Signed growth percentage: 12.5 → "+12.5%".
pub fn format_growth(pct: f32) -> String {
    format!("{pct:+.1}%")
}

/// "1 credit" / "5 credits".
pub fn pluralize_credits(n: u32) -> String {
    if n == 1 {
        "1 credit".to_string()
    } else {
        format!("{n} credits")
    }
}
