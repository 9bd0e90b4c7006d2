//! Records and record sets.
//!
//! A [`Record`] is one row of a result set: an ordered mapping from column
//! name to [`CellValue`]. A record set is a plain slice of records in the
//! order the upstream query returned them.

use crate::error::{Result, TableQueryError};
use crate::traits::Row;
use crate::value::CellValue;

/// One row of a result set.
///
/// Keys keep their insertion order so that column enumeration matches the
/// order in which the upstream query produced them.
///
/// # Example
///
/// ```
/// use tablequery::{CellValue, Record};
///
/// let record = Record::new()
///     .with("name", "Apple Pie")
///     .with("price", "$10");
///
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["name", "price"]);
/// assert_eq!(record.get("name"), Some(&CellValue::Text("Apple Pie".into())));
/// assert_eq!(record.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    cells: Vec<(String, CellValue)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a cell. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((key, value)),
        }
    }

    /// Returns the cell stored under `key`.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the record has a cell for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.iter().any(|(k, _)| k == key)
    }

    /// Iterates over column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Builds a record from a JSON object.
    ///
    /// Key order follows the order of the keys in the source document.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(TableQueryError::NotAnObject),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Parses a JSON array of objects into a record set.
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    match serde_json::from_str::<serde_json::Value>(json)? {
        serde_json::Value::Array(items) => items.into_iter().map(Record::from_json).collect(),
        _ => Err(TableQueryError::NotAnArray),
    }
}

/// Enumerates the columns of a record set.
///
/// The first record's key set is authoritative. An empty set has no columns.
pub fn columns<R: Row>(records: &[R]) -> Vec<&str> {
    records
        .first()
        .map(|first| first.column_names())
        .unwrap_or_default()
}

/// Enumerates the columns of a record set, minus the hidden ones.
pub fn visible_columns<'a, R: Row, S: AsRef<str>>(
    records: &'a [R],
    hidden: &[S],
) -> Vec<&'a str> {
    columns(records)
        .into_iter()
        .filter(|c| !hidden.iter().any(|h| h.as_ref() == *c))
        .collect()
}
