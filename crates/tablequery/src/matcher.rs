//! Search expression evaluation.
//!
//! An expression is a conjunction of search groups. Each group is a
//! disjunction of pipe-separated alternatives, and each alternative is either
//! a quoted phrase or a conjunction of whitespace-separated words:
//!
//! ```text
//! match  = every group matches
//! group  = any alternative matches             (a|b|c)
//! alt    = "phrase" is a substring             ("red car")
//!        | every word is a substring           (red car)
//! ```
//!
//! All matching is case-insensitive substring matching against a
//! [`Haystack`]: either one piece of text (column-scoped search) or the cells
//! of a row (unscoped search, where each word may be found in a different
//! cell).

use crate::parser::{quoted_phrase, split_groups};
use crate::traits::Row;

/// The lowercased text an expression is matched against.
#[derive(Debug, Clone, Copy)]
pub enum Haystack<'a> {
    /// A single lowercased string.
    Text(&'a str),
    /// Lowercased cell texts of one row; a needle matches if any cell holds it.
    Cells(&'a [String]),
}

impl Haystack<'_> {
    /// Returns `true` if `needle` (already lowercased) occurs in the haystack.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Haystack::Text(text) => text.contains(needle),
            Haystack::Cells(cells) => cells.iter().any(|cell| cell.contains(needle)),
        }
    }
}

/// Collects the lowercased text of `columns` for one row.
pub fn row_cells<R: Row + ?Sized>(row: &R, columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .map(|column| row.cell_text(column).to_lowercase())
        .collect()
}

/// One alternative inside a search group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An exact phrase taken from a fully quoted alternative.
    Phrase(String),
    /// Words that must all be present.
    Words(Vec<String>),
}

impl Term {
    /// Parses one trimmed, non-empty alternative.
    pub fn parse(raw: &str) -> Self {
        if let Some(phrase) = quoted_phrase(raw) {
            return Term::Phrase(phrase.to_lowercase());
        }
        // A leading quote with no partner is dropped so half-typed phrases
        // still search on their words.
        let raw = match raw.strip_prefix('"') {
            Some(rest) if !rest.contains('"') => rest,
            _ => raw,
        };
        Term::Words(raw.to_lowercase().split_whitespace().map(String::from).collect())
    }

    pub fn matches(&self, haystack: &Haystack<'_>) -> bool {
        match self {
            Term::Phrase(phrase) => haystack.contains(phrase),
            Term::Words(words) => words.iter().all(|word| haystack.contains(word)),
        }
    }
}

/// A pipe-separated set of alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    alternatives: Vec<Term>,
}

impl Group {
    /// Parses one search group.
    pub fn parse(raw: &str) -> Self {
        let alternatives = raw
            .split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Term::parse)
            .collect();
        Group { alternatives }
    }

    /// The group's alternatives.
    pub fn alternatives(&self) -> &[Term] {
        &self.alternatives
    }

    /// Returns `true` if any alternative matches.
    ///
    /// A group made only of pipes has no alternatives and matches nothing.
    pub fn matches(&self, haystack: &Haystack<'_>) -> bool {
        self.alternatives.iter().any(|t| t.matches(haystack))
    }
}

/// A parsed search expression.
///
/// Parsing is cheap and stateless; callers re-parse whenever the text
/// changes and reuse the result across all rows of one recomputation.
///
/// # Example
///
/// ```
/// use tablequery::{Haystack, Search};
///
/// let search = Search::parse("apple|banana pie");
/// assert!(search.matches(&Haystack::Text("apple pie")));
/// assert!(search.matches(&Haystack::Text("banana cream pie")));
/// assert!(!search.matches(&Haystack::Text("apple tart")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// The whole expression was one quoted phrase.
    Phrase(String),
    /// Groups that must all match.
    Groups(Vec<Group>),
}

impl Search {
    /// Parses an expression.
    ///
    /// A fully quoted expression is always a single phrase, even if it
    /// contains brackets, pipes or further quotes.
    pub fn parse(expression: &str) -> Self {
        let trimmed = expression.trim();
        if let Some(phrase) = quoted_phrase(trimmed) {
            return Search::Phrase(phrase.to_lowercase());
        }
        Search::Groups(split_groups(trimmed).into_iter().map(Group::parse).collect())
    }

    /// Returns `true` if the expression places no constraint on rows.
    pub fn is_empty(&self) -> bool {
        matches!(self, Search::Groups(groups) if groups.is_empty())
    }

    /// Returns `true` if every group matches.
    pub fn matches(&self, haystack: &Haystack<'_>) -> bool {
        match self {
            Search::Phrase(phrase) => haystack.contains(phrase),
            Search::Groups(groups) => groups.iter().all(|g| g.matches(haystack)),
        }
    }

    /// Matches the expression against visible columns of a row.
    pub fn matches_row<R: Row + ?Sized>(&self, row: &R, columns: &[&str]) -> bool {
        if self.is_empty() {
            return true;
        }
        let cells = row_cells(row, columns);
        self.matches(&Haystack::Cells(&cells))
    }
}

/// Evaluates a single search group against a haystack.
pub fn group_matches(group: &str, haystack: &Haystack<'_>) -> bool {
    Group::parse(group).matches(haystack)
}

/// Evaluates a raw search expression against a haystack.
pub fn expression_matches(expression: &str, haystack: &Haystack<'_>) -> bool {
    Search::parse(expression).matches(haystack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn text(expr: &str, target: &str) -> bool {
        expression_matches(expr, &Haystack::Text(&target.to_lowercase()))
    }

    #[test]
    fn plain_word_is_case_insensitive() {
        assert!(text("APPLE", "Apple Pie"));
        assert!(text("pie", "Apple Pie"));
        assert!(!text("cherry", "Apple Pie"));
    }

    #[test]
    fn groups_are_anded() {
        assert!(text("apple pie", "apple pie"));
        assert!(text("pie apple", "apple pie"));
        assert!(!text("apple tart", "apple pie"));
    }

    #[test]
    fn alternatives_are_ored() {
        assert!(text("apple|banana", "banana split"));
        assert!(text("apple | banana", "apple pie"));
        assert!(!text("apple|banana", "cherry"));
    }

    #[test]
    fn bracketed_alternatives_with_words() {
        assert!(text("(red car|blue bike)", "a blue racing bike"));
        assert!(text("(red car|blue bike)", "car painted red"));
        assert!(!text("(red car|blue bike)", "red bike"));
    }

    #[test]
    fn quoted_expression_is_exact_phrase() {
        assert!(text("\"red car\"", "my red car"));
        assert!(!text("\"red car\"", "red fast car"));
    }

    #[test]
    fn quoted_alternative_is_exact_phrase() {
        assert!(text("\"red car\"|bike", "red car"));
        assert!(!text("\"red car\"|bike", "car red"));
        assert!(text("x \"red car\"", "x: red car"));
    }

    #[test]
    fn unmatched_leading_quote_is_dropped() {
        assert!(text("\"red car", "car that is red"));
        assert!(text("\"red", "red"));
    }

    #[test]
    fn leading_quote_with_partner_is_kept() {
        assert_eq!(Term::parse("\"\""), Term::Words(vec!["\"\"".into()]));
        assert_eq!(Term::parse("\"a\"b"), Term::Words(vec!["\"a\"b".into()]));
        assert!(!text("\"a\"b", "ab"));
        assert!(text("\"a\"b", "x\"a\"b"));
    }

    #[test]
    fn whole_expression_phrase_takes_precedence() {
        // Looks like two quoted groups, but is read as one phrase.
        assert!(text("\"a\" \"b\"", "\"a\" \"b\""));
        assert!(!text("\"a\" \"b\"", "a b"));
    }

    #[test]
    fn empty_expression_matches_everything() {
        assert!(text("", "anything"));
        assert!(text("   ", "anything"));
        assert!(Search::parse(" ").is_empty());
    }

    #[test]
    fn pipe_only_group_matches_nothing() {
        assert!(!group_matches("|", &Haystack::Text("x")));
        assert!(!group_matches(" | | ", &Haystack::Text("x")));
        assert!(!text("|", "apple"));
        assert!(!text("apple |", "apple"));
        // Empty alternatives next to real ones are just skipped.
        assert!(text("apple||", "apple"));
    }

    #[test]
    fn term_parsing() {
        assert_eq!(Term::parse("\"Red Car\""), Term::Phrase("red car".into()));
        assert_eq!(
            Term::parse("Red  Car"),
            Term::Words(vec!["red".into(), "car".into()])
        );
        assert_eq!(Group::parse("a||b ").alternatives().len(), 2);
    }

    #[test]
    fn row_words_may_span_columns() {
        let row = Record::new()
            .with("name", "Apple Pie")
            .with("origin", "France");
        let columns = ["name", "origin"];

        let search = Search::parse("(apple france)");
        assert!(search.matches_row(&row, &columns));

        // Phrases must sit inside one cell.
        let phrase = Search::parse("\"pie france\"");
        assert!(!phrase.matches_row(&row, &columns));
    }

    #[test]
    fn row_matching_respects_column_list() {
        let row = Record::new().with("name", "Apple").with("secret", "hidden");

        assert!(!Search::parse("hidden").matches_row(&row, &["name"]));
        assert!(Search::parse("hidden").matches_row(&row, &["name", "secret"]));
    }

    #[test]
    fn row_values_are_stringified() {
        let row = Record::new().with("qty", 30).with("done", true);
        let columns = ["qty", "done"];

        assert!(Search::parse("30").matches_row(&row, &columns));
        assert!(Search::parse("TRUE").matches_row(&row, &columns));
    }
}
