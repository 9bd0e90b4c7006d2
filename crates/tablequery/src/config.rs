//! View configuration.
//!
//! A [`ViewConfig`] holds the externally configured parts of a table view:
//! which columns are hidden from unscoped search and whether the search box
//! is restricted to a mandatory prefix. It is usually deserialized from the
//! JSON a shared view link resolves to.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::guard::RestrictedSearch;

/// Externally configured view settings.
///
/// # Example
///
/// ```
/// use tablequery::ViewConfig;
///
/// let config = ViewConfig::from_json(r#"{
///     "hidden_columns": ["internal_id"],
///     "restricted": { "mandatory_prefix": "status:open", "restricted": true }
/// }"#).unwrap();
///
/// assert!(config.is_hidden("internal_id"));
/// assert_eq!(config.restricted.initial_text(), "status:open ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Columns excluded from unscoped search.
    pub hidden_columns: Vec<String>,
    /// Mandatory search prefix, if any.
    pub restricted: RestrictedSearch,
}

impl ViewConfig {
    pub fn new() -> Self {
        ViewConfig::default()
    }

    /// Parses a configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder-style: hides a column from unscoped search.
    pub fn hide(mut self, column: impl Into<String>) -> Self {
        self.hidden_columns.push(column.into());
        self
    }

    /// Builder-style: sets the search restriction.
    pub fn restrict(mut self, restricted: RestrictedSearch) -> Self {
        self.restricted = restricted;
        self
    }

    pub fn is_hidden(&self, column: &str) -> bool {
        self.hidden_columns.iter().any(|c| c == column)
    }
}
