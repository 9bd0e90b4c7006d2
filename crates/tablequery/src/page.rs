//! Pagination of filtered, sorted rows.

/// Number of rows on one page.
pub const PAGE_SIZE: usize = 100;

/// The page a viewer is on.
///
/// Page numbers are 1-based. [`PageState::clamp`] pulls a page back into the
/// range that exists for a given row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl PageState {
    /// The first page.
    pub fn first() -> Self {
        PageState::default()
    }

    /// A specific page. Page `0` is read as page `1`.
    pub fn new(current_page: usize) -> Self {
        PageState {
            current_page: current_page.max(1),
            ..PageState::default()
        }
    }

    /// Overrides the page size. A size of `0` is read as `1`.
    #[cfg(test)]
    pub(crate) fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves to `page`, read as `1` when zero. Not clamped to a row count.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Returns this state moved into `[1, max(1, total_pages)]`.
    pub fn clamp(self, total_rows: usize) -> Self {
        let last = total_pages(total_rows, self.page_size).max(1);
        PageState {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }
}

/// Number of pages needed for `total_rows`. Zero rows need zero pages.
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1))
}

/// Range metadata for a rendered page.
///
/// Row numbers are 1-based and inclusive. An empty result has
/// `start_row == end_row == 0` and no pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageInfo {
    pub current_page: usize,
    pub page_size: usize,
    pub start_row: usize,
    pub end_row: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Returns `true` if there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of rows plus its range metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    pub info: PageInfo,
}

/// Slices `rows` to the page described by `state`.
///
/// The state is clamped first, so an out-of-range page shows the last page.
///
/// # Example
///
/// ```
/// use tablequery::{paginate, PageState};
///
/// let rows: Vec<u32> = (1..=250).collect();
/// let page = paginate(&rows, PageState::new(2));
///
/// assert_eq!(page.info.total_pages, 3);
/// assert_eq!((page.info.start_row, page.info.end_row), (101, 200));
/// assert_eq!(page.rows.first(), Some(&101));
/// ```
pub fn paginate<T>(rows: &[T], state: PageState) -> Page<'_, T> {
    let total_rows = rows.len();
    let state = state.clamp(total_rows);
    let size = state.page_size;

    let start = (state.current_page - 1) * size;
    let end = (start + size).min(total_rows);
    let slice = rows.get(start..end).unwrap_or(&[]);

    Page {
        rows: slice,
        info: PageInfo {
            current_page: state.current_page,
            page_size: size,
            start_row: if total_rows == 0 { 0 } else { start + 1 },
            end_row: (state.current_page * size).min(total_rows),
            total_rows,
            total_pages: total_pages(total_rows, size),
        },
    }
}
