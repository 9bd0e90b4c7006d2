//! Column scoping and row filtering.
//!
//! An expression of the form `column:inner` restricts the search to one
//! column. The column must exist in the first row of the set; an unknown
//! column yields no rows at all instead of silently widening to a full-table
//! search.

use tracing::debug;

use crate::matcher::{Haystack, Search};
use crate::record::visible_columns;
use crate::traits::Row;

/// How an expression addresses the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Search every visible column with the whole expression.
    Unscoped(&'a str),
    /// Search one column with the text after the colon.
    Column {
        /// Candidate column name, not yet validated.
        column: &'a str,
        /// Trimmed expression after the colon.
        inner: &'a str,
    },
}

impl<'a> Scope<'a> {
    /// Splits an expression on its first colon.
    ///
    /// The column name is taken verbatim, surrounding whitespace included. A
    /// colon at the very start does not scope anything.
    ///
    /// ```
    /// use tablequery::Scope;
    ///
    /// assert_eq!(
    ///     Scope::resolve("age: 30"),
    ///     Scope::Column { column: "age", inner: "30" }
    /// );
    /// assert_eq!(Scope::resolve(":30"), Scope::Unscoped(":30"));
    /// assert_eq!(Scope::resolve("apple"), Scope::Unscoped("apple"));
    /// assert_eq!(Scope::resolve(" age:30").column(), Some(" age"));
    /// ```
    pub fn resolve(expression: &'a str) -> Self {
        match expression.find(':') {
            Some(pos) if pos > 0 => Scope::Column {
                column: &expression[..pos],
                inner: expression[pos + 1..].trim(),
            },
            _ => Scope::Unscoped(expression),
        }
    }

    /// Returns the scoped column name, if any.
    pub fn column(&self) -> Option<&'a str> {
        match self {
            Scope::Column { column, .. } => Some(*column),
            Scope::Unscoped(_) => None,
        }
    }
}

/// Filters a record set by a search expression.
///
/// Unscoped expressions are matched against every column of the first row
/// except the `hidden` ones. Scoped expressions are matched against the one
/// named column, hidden or not. The record set itself is never modified.
///
/// # Example
///
/// ```
/// use tablequery::{filter_records, Record};
///
/// let records = vec![
///     Record::new().with("name", "Alice").with("age", 30),
///     Record::new().with("name", "Bob").with("age", 41),
/// ];
/// let none: &[&str] = &[];
///
/// assert_eq!(filter_records(&records, "age:30", none).len(), 1);
/// assert_eq!(filter_records(&records, "bob", none).len(), 1);
/// assert!(filter_records(&records, "height:180", none).is_empty());
/// ```
pub fn filter_records<'a, R, S>(records: &'a [R], expression: &str, hidden: &[S]) -> Vec<&'a R>
where
    R: Row,
    S: AsRef<str>,
{
    match Scope::resolve(expression) {
        Scope::Column { column, inner } => filter_column(records, column, inner),
        Scope::Unscoped(expression) => {
            let search = Search::parse(expression);
            if search.is_empty() {
                return records.iter().collect();
            }
            let columns = visible_columns(records, hidden);
            records
                .iter()
                .filter(|row| search.matches_row(*row, &columns))
                .collect()
        }
    }
}

fn filter_column<'a, R: Row>(records: &'a [R], column: &str, inner: &str) -> Vec<&'a R> {
    let known = records.first().is_some_and(|first| first.has_column(column));
    if !known {
        debug!(column, "scoped search on unknown column, no rows match");
        return Vec::new();
    }
    if inner.is_empty() {
        return records.iter().collect();
    }

    let search = Search::parse(inner);
    records
        .iter()
        .filter(|row| {
            let text = row.cell_text(column).to_lowercase();
            search.matches(&Haystack::Text(&text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    const NONE: &[&str] = &[];

    fn people() -> Vec<Record> {
        vec![
            Record::new()
                .with("name", "Alice Smith")
                .with("age", 30)
                .with("city", "Paris"),
            Record::new()
                .with("name", "Bob Jones")
                .with("age", 130)
                .with("city", "Oslo"),
            Record::new()
                .with("name", "Carol")
                .with("age", 25)
                .with("city", "Paris 30e"),
        ]
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.cell_text("name")).collect()
    }

    #[test]
    fn resolve_variants() {
        assert_eq!(
            Scope::resolve("city:paris|oslo"),
            Scope::Column {
                column: "city",
                inner: "paris|oslo"
            }
        );
        assert_eq!(Scope::resolve("city:  ").column(), Some("city"));
        assert_eq!(Scope::resolve(" :x").column(), Some(" "));
        assert_eq!(Scope::resolve("paris").column(), None);
    }

    #[test]
    fn column_name_is_not_trimmed() {
        let records = people();
        assert!(filter_records(&records, " :paris", NONE).is_empty());
        assert!(filter_records(&records, " city:paris", NONE).is_empty());
        assert_eq!(filter_records(&records, "city:paris ", NONE).len(), 2);
    }

    #[test]
    fn scoped_search_only_looks_at_one_column() {
        let records = people();
        let rows = filter_records(&records, "age:30", NONE);
        assert_eq!(names(&rows), ["Alice Smith", "Bob Jones"]);
    }

    #[test]
    fn unscoped_search_looks_at_every_visible_column() {
        let records = people();
        let rows = filter_records(&records, "30", NONE);
        assert_eq!(names(&rows), ["Alice Smith", "Bob Jones", "Carol"]);
    }

    #[test]
    fn unknown_column_fails_closed() {
        let records = people();
        assert!(filter_records(&records, "height:30", NONE).is_empty());
        assert!(filter_records(&records, "height:", NONE).is_empty());
    }

    #[test]
    fn empty_inner_keeps_every_row() {
        let records = people();
        assert_eq!(filter_records(&records, "city:", NONE).len(), 3);
    }

    #[test]
    fn scoped_inner_supports_full_grammar() {
        let records = people();
        let rows = filter_records(&records, "city:oslo|\"paris 30\"", NONE);
        assert_eq!(names(&rows), ["Bob Jones", "Carol"]);
    }

    #[test]
    fn scoped_search_is_case_insensitive() {
        let records = people();
        let rows = filter_records(&records, "name:SMITH", NONE);
        assert_eq!(names(&rows), ["Alice Smith"]);
    }

    #[test]
    fn hidden_columns_are_skipped_when_unscoped() {
        let records = people();
        assert_eq!(filter_records(&records, "oslo", &["city"]).len(), 0);
        // Scoping still reaches a hidden column.
        assert_eq!(filter_records(&records, "city:oslo", &["city"]).len(), 1);
    }

    #[test]
    fn empty_expression_keeps_every_row() {
        let records = people();
        assert_eq!(filter_records(&records, "", NONE).len(), 3);
    }

    #[test]
    fn empty_record_set() {
        let records: Vec<Record> = Vec::new();
        assert!(filter_records(&records, "age:1", NONE).is_empty());
        assert!(filter_records(&records, "x", NONE).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let records = people();
        let before = records.clone();
        let _ = filter_records(&records, "age:30", NONE);
        assert_eq!(records, before);
    }
}
