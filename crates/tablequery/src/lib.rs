//! Tablequery - search, scope, sort and paginate in-memory result sets.
//!
//! Tablequery evaluates the small search language of a data table against
//! rows that are already in memory. It supports:
//!
//! - Loosely-typed cells: text, numbers, booleans, nulls, timestamps
//! - Search groups joined by AND, pipe-separated OR alternatives
//! - Bracket grouping and quoted exact phrases
//! - `column:` scoping that fails closed on unknown columns
//! - A type-aware sort that keeps nulls last
//! - Fixed-size pagination with row-range metadata
//! - A restricted mode where a seeded search prefix cannot be removed
//!
//! # Quick Start
//!
//! ```rust
//! use tablequery::{compute_view, PageState, Record, SortState, ViewConfig};
//!
//! let records = vec![
//!     Record::new().with("name", "Apple Pie").with("price", "$10"),
//!     Record::new().with("name", "Banana").with("price", "$5"),
//!     Record::new().with("name", "Cherry").with("price", None::<f64>),
//! ];
//!
//! let view = compute_view(
//!     &records,
//!     "",
//!     &SortState::asc("price"),
//!     PageState::first(),
//!     &ViewConfig::default(),
//! );
//!
//! let names: Vec<String> = view.rows.iter().map(|r| r.get("name").unwrap().to_text()).collect();
//! assert_eq!(names, ["Banana", "Apple Pie", "Cherry"]);
//! assert_eq!((view.info.start_row, view.info.end_row), (1, 3));
//! ```
//!
//! # Search Syntax
//!
//! ```text
//! apple pie            both words, anywhere in the row
//! apple|banana         either word
//! (red car|blue bike)  "red" and "car", or "blue" and "bike"
//! "red car"            the exact phrase
//! price:10             "10" inside the price column only
//! ```
//!
//! Matching is case-insensitive substring matching on the stringified cell.
//! Unscoped words may each be found in a different visible column; a quoted
//! phrase must sit inside a single cell.
//!
//! # Sort Semantics
//!
//! | Values | Ascending order |
//! |--------|-----------------|
//! | Both numeric (`$1,200`, `45%`, `3.5`) | numeric |
//! | One numeric | numeric first |
//! | Neither numeric | case-insensitive text |
//! | Null or missing | always last |
//!
//! Descending reverses every rule except the last.

mod config;
mod error;
mod guard;
mod matcher;
mod ordering;
mod page;
mod parser;
mod record;
mod scope;
mod traits;
mod value;
mod view;

// Re-export public API
pub use config::ViewConfig;
pub use error::{Result, TableQueryError};
pub use guard::RestrictedSearch;
pub use matcher::{expression_matches, group_matches, row_cells, Group, Haystack, Search, Term};
pub use ordering::{collate, compare_cells, smart_compare, sort_rows, Dir, SortState};
pub use page::{paginate, total_pages, Page, PageInfo, PageState, PAGE_SIZE};
pub use parser::{quoted_phrase, split_groups};
pub use record::{columns, records_from_json, visible_columns, Record};
pub use scope::{filter_records, Scope};
pub use traits::Row;
pub use value::CellValue;
pub use view::{compute_view, TableView, ViewResult};
