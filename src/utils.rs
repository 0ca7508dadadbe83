use chrono::{Datelike, Month, NaiveDate};

/// Number of days in the given month, falling back to 30 for dates chrono
/// cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Full English month name, or `"Unknown"` outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Three letter month abbreviation as used in chart labels (`Aug`).
pub fn short_month_name(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}

/// Splits a chart label like `Aug 10` into its month part and day.
///
/// The month part must be at least three ASCII letters and the day one or
/// two digits, so `Week 2` parses as well. Anything else (`09:00`,
/// `Aug 2025`) yields `None`.
pub fn parse_day_label(label: &str) -> Option<(&str, u32)> {
    let mut parts = label.split_whitespace();
    let (month, day) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let month_ok = month.len() >= 3 && month.chars().all(|c| c.is_ascii_alphabetic());
    let day_ok = (1..=2).contains(&day.len()) && day.chars().all(|c| c.is_ascii_digit());
    if !(month_ok && day_ok) {
        return None;
    }
    Some((month, day.parse().ok()?))
}
