//! # Trackboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The generic table view engine (sorting, rendering, empty state)
//! - The collection query model and its backend port
//! - The application state store and its persistence port
//! - Dashboard summary derivations
//!
//! ## Architecture Principles
//! - Only depends on `trackboard-common` and `trackboard-domain`
//! - No database, HTTP, or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod items;
pub mod query;
pub mod stats;
pub mod store;
pub mod table;

// Re-export specific items to avoid ambiguity
pub use items::ports::{Item, ItemUpdate, ItemsRepository, NewItem};
pub use query::ports::CollectionStore;
pub use query::{CollectionHandle, CollectionQuery, FilterValue, OrderBy, QueryError};
pub use store::ports::StatePersistence;
pub use store::{StatePatch, StateStore};
pub use table::{Accessor, Column, HeaderCell, Row, SortConfig, SortDirection, TableView};
