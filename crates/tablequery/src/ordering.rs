//! Sort direction, sort state and the smart comparator.
//!
//! Rows are ordered by a single column with type-aware rules:
//!
//! - Nulls and missing cells always go last, in both directions.
//! - Values that read as numbers (after stripping `,`, currency and `%`)
//!   compare numerically and sort before values that don't.
//! - Everything else compares as case-insensitive text with accents folded.
//!
//! The direction is applied after the type rules, so under [`Dir::Desc`] the
//! non-numeric values come before the numeric ones. Only the null rule is
//! immune to direction.

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::traits::Row;
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The active sort: at most one column and a direction.
///
/// # Example
///
/// ```
/// use tablequery::{Dir, SortState};
///
/// let mut sort = SortState::default();
/// sort.toggle("price");
/// assert_eq!(sort, SortState::by("price", Dir::Asc));
///
/// sort.toggle("price");
/// assert_eq!(sort.dir, Dir::Desc);
///
/// sort.toggle("name");
/// assert_eq!(sort, SortState::by("name", Dir::Asc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    /// The column to sort by, if any.
    pub column: Option<String>,
    /// The sort direction.
    pub dir: Dir,
}

impl SortState {
    /// No sort: rows keep their upstream order.
    pub fn none() -> Self {
        SortState::default()
    }

    /// Sorts by `column` in `dir`.
    pub fn by(column: impl Into<String>, dir: Dir) -> Self {
        SortState {
            column: Some(column.into()),
            dir,
        }
    }

    /// Ascending sort on `column`.
    pub fn asc(column: impl Into<String>) -> Self {
        SortState::by(column, Dir::Asc)
    }

    /// Descending sort on `column`.
    pub fn desc(column: impl Into<String>) -> Self {
        SortState::by(column, Dir::Desc)
    }

    /// Handles a click on a column header.
    ///
    /// Clicking the active column flips the direction; clicking another
    /// column makes it active in ascending order.
    pub fn toggle(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.dir = self.dir.flip();
        } else {
            self.column = Some(column.to_string());
            self.dir = Dir::Asc;
        }
    }

    /// Returns `true` if a sort column is set.
    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// Compares two rows under this sort. Without a column, all rows are equal.
    pub fn compare<R: Row + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        match &self.column {
            Some(column) => smart_compare(a, b, column, self.dir),
            None => Ordering::Equal,
        }
    }
}

/// Compares two rows on one column with the smart sort rules.
pub fn smart_compare<R: Row + ?Sized>(a: &R, b: &R, column: &str, dir: Dir) -> Ordering {
    let left = a.cell(column);
    let right = b.cell(column);
    compare_cells(
        left.as_deref().unwrap_or(&CellValue::Null),
        right.as_deref().unwrap_or(&CellValue::Null),
        dir,
    )
}

/// Compares two cell values with the smart sort rules.
///
/// ```
/// use std::cmp::Ordering;
/// use tablequery::{compare_cells, CellValue, Dir};
///
/// let five = CellValue::from("$5");
/// let ten = CellValue::from(10);
///
/// assert_eq!(compare_cells(&five, &ten, Dir::Asc), Ordering::Less);
/// assert_eq!(compare_cells(&five, &ten, Dir::Desc), Ordering::Greater);
/// assert_eq!(compare_cells(&CellValue::Null, &ten, Dir::Desc), Ordering::Greater);
/// ```
pub fn compare_cells(a: &CellValue, b: &CellValue, dir: Dir) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        // Nulls go last regardless of direction.
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => dir.apply(compare_present(a, b)),
    }
}

fn compare_present(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_sort_number(), b.as_sort_number()) {
        // Both finite, so partial_cmp always succeeds.
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(a.to_text().trim(), b.to_text().trim()),
    }
}

/// Case-insensitive text ordering with accents folded to their base letters.
///
/// Strings that fold to the same key are ordered by their lowercase form, so
/// `"e"` sorts before `"é"` and both before `"f"`.
pub fn collate(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    deunicode(&a)
        .cmp(&deunicode(&b))
        .then_with(|| a.cmp(&b))
}

/// Sorts borrowed rows in place by the given sort state.
///
/// The sort is stable: rows that compare equal keep their relative order.
pub fn sort_rows<R: Row>(rows: &mut [&R], sort: &SortState) {
    if !sort.is_active() {
        return;
    }
    rows.sort_by(|a, b| sort.compare(*a, *b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display_and_flip() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::Asc.flip(), Dir::Desc);
        assert!(Dir::Desc.flip().is_asc());
    }

    #[test]
    fn toggle_rules() {
        let mut sort = SortState::none();
        assert!(!sort.is_active());

        sort.toggle("a");
        assert_eq!(sort, SortState::asc("a"));
        sort.toggle("a");
        assert_eq!(sort, SortState::desc("a"));
        sort.toggle("a");
        assert_eq!(sort, SortState::asc("a"));

        sort.toggle("b");
        assert_eq!(sort, SortState::asc("b"));
    }

    #[test]
    fn numbers_compare_numerically() {
        let a = CellValue::from("9");
        let b = CellValue::from("10");
        assert_eq!(compare_cells(&a, &b, Dir::Asc), Ordering::Less);

        let a = CellValue::from("$1,200");
        let b = CellValue::from("950");
        assert_eq!(compare_cells(&a, &b, Dir::Asc), Ordering::Greater);
    }

    #[test]
    fn numbers_before_text_ascending() {
        let n = CellValue::from(3);
        let t = CellValue::from("abc");
        assert_eq!(compare_cells(&n, &t, Dir::Asc), Ordering::Less);
        assert_eq!(compare_cells(&t, &n, Dir::Asc), Ordering::Greater);
    }

    // Descending also reverses the numbers-before-text rule. Kept as is for
    // compatibility with existing views, though it looks accidental.
    #[test]
    fn descending_puts_text_before_numbers() {
        let n = CellValue::from(3);
        let t = CellValue::from("abc");
        assert_eq!(compare_cells(&n, &t, Dir::Desc), Ordering::Greater);
    }

    #[test]
    fn nulls_last_both_directions() {
        let null = CellValue::Null;
        let v = CellValue::from(1);
        for dir in [Dir::Asc, Dir::Desc] {
            assert_eq!(compare_cells(&null, &v, dir), Ordering::Greater);
            assert_eq!(compare_cells(&v, &null, dir), Ordering::Less);
            assert_eq!(compare_cells(&null, &null, dir), Ordering::Equal);
        }
    }

    #[test]
    fn text_is_case_insensitive_and_accent_folded() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("APPLE", "apple"), Ordering::Equal);
        assert_eq!(collate("éclair", "fig"), Ordering::Less);
        assert_eq!(collate("e", "é"), Ordering::Less);
    }

    #[test]
    fn booleans_and_timestamps_compare_as_text() {
        let f = CellValue::from(false);
        let t = CellValue::from(true);
        assert_eq!(compare_cells(&f, &t, Dir::Asc), Ordering::Less);

        let early = CellValue::from("2023-12-31");
        let late = CellValue::from("2024-01-15T08:00:00Z");
        assert_eq!(compare_cells(&early, &late, Dir::Asc), Ordering::Less);
    }

    #[test]
    fn missing_cell_reads_as_null() {
        let with = Record::new().with("p", 1);
        let without = Record::new().with("q", 1);
        assert_eq!(
            smart_compare(&without, &with, "p", Dir::Asc),
            Ordering::Greater
        );
    }

    #[test]
    fn sort_rows_null_last() {
        let records: Vec<Record> = [Some(10), None, Some(5)]
            .into_iter()
            .map(|v| Record::new().with("n", v))
            .collect();

        let mut rows: Vec<&Record> = records.iter().collect();
        sort_rows(&mut rows, &SortState::asc("n"));
        let asc: Vec<String> = rows.iter().map(|r| r.cell_text("n")).collect();
        assert_eq!(asc, ["5", "10", ""]);

        sort_rows(&mut rows, &SortState::desc("n"));
        let desc: Vec<String> = rows.iter().map(|r| r.cell_text("n")).collect();
        assert_eq!(desc, ["10", "5", ""]);
    }

    #[test]
    fn sort_is_stable_and_inactive_sort_is_noop() {
        let records = vec![
            Record::new().with("k", 1).with("id", "a"),
            Record::new().with("k", 1).with("id", "b"),
            Record::new().with("k", 0).with("id", "c"),
        ];
        let mut rows: Vec<&Record> = records.iter().collect();

        sort_rows(&mut rows, &SortState::none());
        let ids: Vec<String> = rows.iter().map(|r| r.cell_text("id")).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        sort_rows(&mut rows, &SortState::asc("k"));
        let ids: Vec<String> = rows.iter().map(|r| r.cell_text("id")).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
