use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Non-empty string field. Empty strings count as missing.
#[must_use]
pub fn get_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[must_use]
pub fn get_string_or(value: &Value, field: &str, default: &str) -> String {
    get_str(value, field).unwrap_or(default).to_string()
}

/// First non-empty string among `fields`.
#[must_use]
pub fn first_str(value: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| get_str(value, field))
        .map(str::to_string)
}

/// Integer field. Floats are floored and numeric strings are parsed, since
/// hand-edited data files are not consistent about either.
#[must_use]
pub fn get_int(value: &Value, field: &str) -> Option<i64> {
    value.get(field).and_then(value_as_int)
}

#[must_use]
pub fn value_as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.floor() as i64),
        _ => None,
    }
}

#[must_use]
pub fn get_array<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    value
        .get(field)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

#[must_use]
pub fn get_string_list(value: &Value, field: &str) -> Vec<String> {
    get_array(value, field)
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts RFC 3339 timestamps, naive date-times and plain `YYYY-MM-DD` dates.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "January 5, 2025"
#[must_use]
pub fn format_long_date(s: &str) -> String {
    parse_date(s).map_or_else(|| s.to_string(), |d| d.format("%B %-d, %Y").to_string())
}

/// "Jan 5, 2025"
#[must_use]
pub fn format_short_date(s: &str) -> String {
    parse_date(s).map_or_else(|| s.to_string(), |d| d.format("%b %-d, %Y").to_string())
}

/// Splits at a character (not byte) boundary.
#[must_use]
pub fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}

#[must_use]
pub fn truncate_chars(s: &str, n: usize) -> &str {
    split_at_chars(s, n).0
}
