//! Cell value types for loosely-typed result sets.
//!
//! The [`CellValue`] enum is the closed set of scalar shapes a cell can take
//! when rows arrive from an upstream query: text, numbers, booleans, nulls and
//! timestamp-shaped text. The engine never widens past these variants; every
//! comparison or substring test goes through the coercions defined here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters removed before a value is tried as a number: thousands
/// separators, currency symbols and percent signs.
static NUMERIC_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,$€£¥₹%]").expect("numeric noise pattern is valid"));

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A single cell of a [`Record`](crate::Record).
///
/// # Example
///
/// ```
/// use tablequery::CellValue;
///
/// assert_eq!(CellValue::from("Apple Pie").to_text(), "Apple Pie");
/// assert_eq!(CellValue::from(10.0).to_text(), "10");
/// assert!(CellValue::from("2024-03-01").is_timestamp());
/// assert_eq!(CellValue::from("$1,250").as_sort_number(), Some(1250.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Free-form text.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Null or absent.
    #[default]
    Null,
    /// Text that looks like a date or date-time. The original text is kept.
    Timestamp(String),
}

impl CellValue {
    /// Classifies a piece of text, promoting date-shaped strings to
    /// [`CellValue::Timestamp`].
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if looks_like_timestamp(&text) {
            CellValue::Timestamp(text)
        } else {
            CellValue::Text(text)
        }
    }

    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Returns `true` if this is a `Boolean` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, CellValue::Boolean(_))
    }

    /// Returns `true` if this is a `Timestamp` value.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, CellValue::Timestamp(_))
    }

    /// Extracts the text of a `Text` or `Timestamp` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Timestamp(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Parses a `Timestamp` value into a naive date-time.
    ///
    /// Date-only values resolve to midnight. Offsets are normalized to UTC.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Timestamp(s) => parse_timestamp(s),
            _ => None,
        }
    }

    /// Stringifies the value the way search and sort see it.
    ///
    /// Nulls render as the empty string, so they never satisfy a search term.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) | CellValue::Timestamp(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::Null => String::new(),
        }
    }

    /// Lowercased stringification used for case-insensitive matching.
    pub fn to_search_text(&self) -> String {
        self.to_text().to_lowercase()
    }

    /// Coerces the value to a number for sorting.
    ///
    /// The trimmed text has separators, currency and percent symbols stripped
    /// and must then parse completely as a finite number.
    pub fn as_sort_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Null => None,
            other => parse_sort_number(other.to_text().trim()),
        }
    }
}

/// Parses trimmed text as a sort number, ignoring numeric noise.
fn parse_sort_number(text: &str) -> Option<f64> {
    let stripped = NUMERIC_NOISE.replace_all(text, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn looks_like_timestamp(text: &str) -> bool {
    // Cheap rejection before handing off to chrono.
    let bytes = text.as_bytes();
    if bytes.len() < 10 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return false;
    }
    parse_timestamp(text).is_some()
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::from_text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
            serde_json::Value::String(s) => CellValue::from_text(s),
            // Nested structures are searched as their compact JSON text.
            other => CellValue::Text(other.to_string()),
        }
    }
}
