//! The row abstraction the engine reads through.
//!
//! Every search, sort and scope operation is generic over [`Row`], so callers
//! can run the engine over their own structs as well as over [`Record`]s.

use std::borrow::Cow;

use crate::record::Record;
use crate::value::CellValue;

/// A row that exposes named cells.
///
/// # Manual Implementation
///
/// ```
/// use std::borrow::Cow;
/// use tablequery::{CellValue, Row};
///
/// struct Product {
///     name: String,
///     price: Option<f64>,
/// }
///
/// impl Row for Product {
///     fn cell(&self, column: &str) -> Option<Cow<'_, CellValue>> {
///         match column {
///             "name" => Some(Cow::Owned(CellValue::Text(self.name.clone()))),
///             "price" => Some(Cow::Owned(self.price.into())),
///             _ => None,
///         }
///     }
///
///     fn column_names(&self) -> Vec<&str> {
///         vec!["name", "price"]
///     }
/// }
///
/// let apple = Product { name: "Apple".into(), price: None };
/// assert_eq!(apple.cell_text("name"), "Apple");
/// assert_eq!(apple.cell_text("price"), "");
/// ```
pub trait Row {
    /// Returns the cell for `column`, or `None` if the row has no such column.
    fn cell(&self, column: &str) -> Option<Cow<'_, CellValue>>;

    /// Returns the row's column names in display order.
    fn column_names(&self) -> Vec<&str>;

    /// Returns `true` if the row has a cell named `column`.
    fn has_column(&self, column: &str) -> bool {
        self.column_names().iter().any(|c| *c == column)
    }

    /// Stringified cell value; missing cells and nulls are empty.
    fn cell_text(&self, column: &str) -> String {
        self.cell(column).map(|v| v.to_text()).unwrap_or_default()
    }
}

impl Row for Record {
    fn cell(&self, column: &str) -> Option<Cow<'_, CellValue>> {
        self.get(column).map(Cow::Borrowed)
    }

    fn column_names(&self) -> Vec<&str> {
        self.keys().collect()
    }

    fn has_column(&self, column: &str) -> bool {
        self.contains_key(column)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn cell(&self, column: &str) -> Option<Cow<'_, CellValue>> {
        (**self).cell(column)
    }

    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn has_column(&self, column: &str) -> bool {
        (**self).has_column(column)
    }
}
