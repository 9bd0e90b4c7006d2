//! Restricted search: a seeded prefix the viewer cannot edit away.
//!
//! Shared views can pin part of the search expression, for example
//! `status:open`. While the restriction is active every committed expression
//! must start with that prefix; anything else is replaced by the prefix
//! followed by a single space, leaving the viewer free to append terms.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Externally supplied restriction on the search text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictedSearch {
    /// Text every committed expression must start with.
    pub mandatory_prefix: String,
    /// Whether the prefix is enforced.
    pub restricted: bool,
}

impl RestrictedSearch {
    /// An enforced prefix.
    pub fn new(mandatory_prefix: impl Into<String>) -> Self {
        RestrictedSearch {
            mandatory_prefix: mandatory_prefix.into(),
            restricted: true,
        }
    }

    /// No restriction.
    pub fn unrestricted() -> Self {
        RestrictedSearch::default()
    }

    /// Returns `true` if a non-empty prefix is being enforced.
    pub fn is_active(&self) -> bool {
        self.restricted && !self.mandatory_prefix.is_empty()
    }

    /// The smallest text a restricted search may hold: the prefix plus one
    /// space. Empty when no restriction is active.
    pub fn initial_text(&self) -> String {
        if self.is_active() {
            format!("{} ", self.mandatory_prefix)
        } else {
            String::new()
        }
    }

    /// Returns the text to commit for a proposed search value.
    ///
    /// ```
    /// use tablequery::RestrictedSearch;
    ///
    /// let guard = RestrictedSearch::new("status:open");
    /// assert_eq!(guard.commit("status:open urgent"), "status:open urgent");
    /// assert_eq!(guard.commit("open"), "status:open ");
    ///
    /// assert_eq!(RestrictedSearch::unrestricted().commit("open"), "open");
    /// ```
    pub fn commit(&self, proposed: &str) -> String {
        if !self.is_active() || proposed.starts_with(&self.mandatory_prefix) {
            return proposed.to_string();
        }
        debug!(
            prefix = %self.mandatory_prefix,
            proposed,
            "search would drop the mandatory prefix, resetting"
        );
        self.initial_text()
    }
}
