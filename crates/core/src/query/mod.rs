//! Collection queries
//!
//! A [`CollectionQuery`] names every recognized option explicitly: an
//! optional field projection, conjunctive equality filters, and an optional
//! single-column order. Filters carrying the sentinel value `"all"` (or no
//! value at all) constrain nothing. Backends implementing
//! [`ports::CollectionStore`] execute the query; [`CollectionHandle`] wraps a
//! backend with loading/error bookkeeping and a manual refetch.

mod handle;
pub mod ports;

pub use handle::{CollectionHandle, QueryError};

use serde::{Deserialize, Serialize};
use trackboard_domain::constants::FILTER_ALL;

/// An equality filter operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    Value(String),
    /// The sentinel "all": no constraint.
    All,
    /// No value supplied: no constraint.
    Absent,
}

impl FilterValue {
    /// Normalize an optional raw value: missing and sentinel values become
    /// non-constraints.
    pub fn new(raw: Option<String>) -> Self {
        match raw {
            None => Self::Absent,
            Some(value) if value == FILTER_ALL => Self::All,
            Some(value) => Self::Value(value),
        }
    }

    /// The concrete constraint, if this filter imposes one.
    pub fn effective(&self) -> Option<&str> {
        match self {
            Self::Value(value) if value != FILTER_ALL => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::new(Some(value.to_string()))
    }
}

/// Single-column ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

/// A fully explicit collection query: projection, equality filters, order.
///
/// Filters are conjunctive equality only: no ranges, negation, or OR.
/// Without an order the result order is backend-defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub select: Option<String>,
    pub filters: Vec<(String, FilterValue)>,
    pub order_by: Option<OrderBy>,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, projection: impl Into<String>) -> Self {
        self.select = Some(projection.into());
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Filter from an optional raw value; `None` and `"all"` become
    /// non-constraints rather than being dropped, so the query remembers the
    /// caller's intent.
    pub fn filter_opt(mut self, field: impl Into<String>, value: Option<String>) -> Self {
        self.filters.push((field.into(), FilterValue::new(value)));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order_by = Some(OrderBy { column: column.into(), ascending });
        self
    }

    /// The filters that actually constrain results.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter_map(|(field, value)| value.effective().map(|value| (field.as_str(), value)))
    }
}
