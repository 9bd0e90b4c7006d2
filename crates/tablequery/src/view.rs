//! The full view pipeline.
//!
//! [`compute_view`] is a pure function of its inputs:
//!
//! ```text
//! expression --guard--> committed expression
//! records --scope/filter--> matched --smart sort--> sorted --slice--> page
//! ```
//!
//! [`TableView`] wraps the mutable inputs (search text, sort, page) for a UI
//! that re-renders on every keystroke, header click or page change.

use tracing::debug;

use crate::config::ViewConfig;
use crate::ordering::{sort_rows, SortState};
use crate::page::{paginate, PageInfo, PageState};
use crate::scope::filter_records;
use crate::traits::Row;

/// The rows to display plus everything needed to render around them.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a, R> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a R>,
    /// Range metadata for the current page.
    pub info: PageInfo,
    /// The search expression as committed, after the restricted-search guard.
    pub expression: String,
}

impl<R> ViewResult<'_, R> {
    /// Returns `true` if no row matched.
    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }
}

/// Filters, sorts and pages `records`.
///
/// The record set is only read. The page is clamped to the pages that exist
/// after filtering.
///
/// # Example
///
/// ```
/// use tablequery::{compute_view, PageState, Record, SortState, ViewConfig};
///
/// let records = vec![
///     Record::new().with("name", "Apple Pie").with("price", "$10"),
///     Record::new().with("name", "Banana").with("price", "$5"),
///     Record::new().with("name", "Cherry").with("price", None::<f64>),
/// ];
///
/// let view = compute_view(
///     &records,
///     "apple|banana",
///     &SortState::asc("price"),
///     PageState::first(),
///     &ViewConfig::default(),
/// );
///
/// let names: Vec<_> = view.rows.iter().map(|r| r.get("name").unwrap().to_text()).collect();
/// assert_eq!(names, ["Banana", "Apple Pie"]);
/// assert_eq!(view.info.total_rows, 2);
/// ```
pub fn compute_view<'a, R: Row>(
    records: &'a [R],
    expression: &str,
    sort: &SortState,
    page: PageState,
    config: &ViewConfig,
) -> ViewResult<'a, R> {
    let expression = config.restricted.commit(expression);

    let mut matched = filter_records(records, &expression, &config.hidden_columns);
    sort_rows(&mut matched, sort);

    let page = paginate(&matched, page);
    debug!(
        records = records.len(),
        matched = page.info.total_rows,
        page = page.info.current_page,
        pages = page.info.total_pages,
        "view computed"
    );

    ViewResult {
        rows: page.rows.to_vec(),
        info: page.info,
        expression,
    }
}

/// Live state of one table view.
///
/// # Example
///
/// ```
/// use tablequery::{Record, RestrictedSearch, TableView, ViewConfig};
///
/// let records: Vec<Record> = (0..250)
///     .map(|i| {
///         let status = if i % 2 == 0 { "open" } else { "closed" };
///         Record::new().with("id", i).with("status", status)
///     })
///     .collect();
///
/// let config = ViewConfig::new().restrict(RestrictedSearch::new("status:open"));
/// let mut view = TableView::new(config);
/// assert_eq!(view.search(), "status:open ");
///
/// view.next_page();
/// let result = view.render(&records);
/// assert_eq!(result.info.total_rows, 125);
/// assert_eq!(result.info.current_page, 2);
///
/// // Clearing the search puts the prefix back.
/// view.set_search("");
/// assert_eq!(view.search(), "status:open ");
///
/// // Narrowing the search returns to the first page.
/// view.set_search("status:open 1");
/// assert_eq!(view.page().current_page(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableView {
    config: ViewConfig,
    search: String,
    sort: SortState,
    page: PageState,
}

impl TableView {
    /// Creates a view, seeding the search box from the restricted prefix.
    pub fn new(config: ViewConfig) -> Self {
        TableView {
            search: config.restricted.initial_text(),
            config,
            sort: SortState::none(),
            page: PageState::first(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The committed search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Commits new search text through the restricted-search guard.
    ///
    /// Returns the committed text. Any change to the text moves back to the
    /// first page.
    pub fn set_search(&mut self, proposed: &str) -> &str {
        let committed = self.config.restricted.commit(proposed);
        if committed != self.search {
            self.search = committed;
            self.page.go_to(1);
        }
        &self.search
    }

    /// Clicks a column header.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort.toggle(column);
    }

    /// Replaces the sort outright.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Jumps to `page`. Clamped on the next render.
    pub fn set_page(&mut self, page: usize) {
        self.page.go_to(page);
    }

    pub fn next_page(&mut self) {
        self.page.go_to(self.page.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.page.go_to(self.page.current_page().saturating_sub(1));
    }

    /// Computes the current page and stores the clamped page number.
    pub fn render<'a, R: Row>(&mut self, records: &'a [R]) -> ViewResult<'a, R> {
        let result = compute_view(records, &self.search, &self.sort, self.page, &self.config);
        self.page.go_to(result.info.current_page);
        result
    }
}
