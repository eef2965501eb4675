//! Generic sortable table view
//!
//! Renders an ordered sequence of records into header and data rows from a
//! list of column descriptors, and owns the client-side sort state. Columns
//! bind to records either through a named field (sortable) or a derivation
//! closure (never sortable); the distinction is a tagged variant decided at
//! column-definition time, not a runtime type check.

mod column;
mod sort;
mod view;

pub use column::{Accessor, Column};
pub use sort::{compare_values, SortConfig, SortDirection};
pub use view::{HeaderCell, Row, TableView, NO_DATA_PLACEHOLDER};
