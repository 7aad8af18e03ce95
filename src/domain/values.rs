use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const CURRENCY_SYMBOL: &str = "₹";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a currency string such as `₹1,234.56` or `Rs. 1,200` into its
/// numeric value.
///
/// Any prefix before the first digit, sign or bare decimal point is dropped,
/// so the dot closing `Rs.` is never read as a decimal point. After that
/// every character other than digits, the decimal point and a sign is
/// discarded. Returns `None` when no digit survives.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let chars: Vec<(usize, char)> = trimmed.char_indices().collect();
    let start = chars.iter().enumerate().find_map(|(pos, &(idx, c))| {
        let bare_point = c == '.'
            && chars.get(pos + 1).is_some_and(|&(_, next)| next.is_ascii_digit())
            && !pos
                .checked_sub(1)
                .and_then(|prev| chars.get(prev))
                .is_some_and(|&(_, prev)| prev.is_alphabetic());
        (c.is_ascii_digit() || c == '-' || bare_point).then_some(idx)
    })?;

    let cleaned: String = trimmed[start..]
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses a date-like string into a calendar day. Time of day is dropped.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(timestamp.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_SYMBOL}0.00");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}

/// Human readable date for table cells, e.g. `Jan 15, 2024`. Falls back to
/// the raw text when it cannot be parsed.
pub fn display_date(text: &str) -> String {
    parse_date(text)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Reads the value of an `<input type="date">`; empty means "no bound".
pub fn parse_date_input(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
