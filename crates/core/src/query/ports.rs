//! Port interfaces for collection access
//!
//! These traits define the boundary between the query model and the two
//! interchangeable backends (local state store, remote hosted backend).

use async_trait::async_trait;
use serde_json::Value;
use trackboard_domain::Result;

use super::CollectionQuery;

/// Backend capable of answering collection queries.
///
/// Rows travel as JSON objects with wire-form (camelCase) keys so both
/// backends answer identically; callers deserialize into typed records.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// All rows of `collection` matching the query.
    async fn select(&self, collection: &str, query: &CollectionQuery) -> Result<Vec<Value>>;

    /// Insert one row into `collection`, returning the stored row.
    async fn insert(&self, collection: &str, row: Value) -> Result<Value>;
}
