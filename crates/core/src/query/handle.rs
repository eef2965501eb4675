//! Collection query handle
//!
//! One handle per (collection, query) pair, tracking loading/data/error and
//! exposing a manual refetch. Errors are captured as values, never
//! propagated to the caller.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;
use trackboard_domain::TrackboardError;

use super::ports::CollectionStore;
use super::CollectionQuery;

/// Structured query failure, safe to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub message: String,
    pub code: Option<String>,
}

impl From<TrackboardError> for QueryError {
    fn from(err: TrackboardError) -> Self {
        let code = match &err {
            TrackboardError::Network(_) => Some("network".to_string()),
            TrackboardError::Backend(_) => Some("backend".to_string()),
            TrackboardError::Serialization(_) => Some("serialization".to_string()),
            TrackboardError::NotFound(_) => Some("not-found".to_string()),
            _ => None,
        };
        Self { message: err.to_string(), code }
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Stateful handle over one collection query.
///
/// `fetch` transitions to loading, executes the query, then either stores
/// the typed rows and clears any prior error, or stores the error and clears
/// any prior data. Loading clears in both cases. A superseded in-flight
/// request is not cancelled; whichever `fetch` completes last wins.
pub struct CollectionHandle<T> {
    collection: String,
    query: CollectionQuery,
    store: Arc<dyn CollectionStore>,
    data: Option<Vec<T>>,
    error: Option<QueryError>,
    loading: bool,
    stale: bool,
}

impl<T: DeserializeOwned> CollectionHandle<T> {
    pub fn new(store: Arc<dyn CollectionStore>, collection: impl Into<String>) -> Self {
        Self::with_query(store, collection, CollectionQuery::new())
    }

    pub fn with_query(
        store: Arc<dyn CollectionStore>,
        collection: impl Into<String>,
        query: CollectionQuery,
    ) -> Self {
        Self {
            collection: collection.into(),
            query,
            store,
            data: None,
            error: None,
            loading: true,
            stale: true,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn query(&self) -> &CollectionQuery {
        &self.query
    }

    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True until the current query has been fetched at least once.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replace the query. A changed query marks the handle stale so the next
    /// `fetch` re-executes; an identical query is a no-op.
    pub fn set_query(&mut self, query: CollectionQuery) {
        if self.query != query {
            self.query = query;
            self.stale = true;
        }
    }

    /// Execute the query, updating data/error/loading.
    pub async fn fetch(&mut self) {
        self.loading = true;

        let result = self.store.select(&self.collection, &self.query).await.and_then(|rows| {
            rows.into_iter()
                .map(|row| {
                    serde_json::from_value::<T>(row)
                        .map_err(|err| TrackboardError::Serialization(err.to_string()))
                })
                .collect::<Result<Vec<T>, _>>()
        });

        match result {
            Ok(rows) => {
                debug!(collection = %self.collection, rows = rows.len(), "collection fetched");
                self.data = Some(rows);
                self.error = None;
            }
            Err(err) => {
                debug!(collection = %self.collection, error = %err, "collection fetch failed");
                self.error = Some(err.into());
                self.data = None;
            }
        }

        self.loading = false;
        self.stale = false;
    }

    /// Repeat the current query on demand, independent of staleness.
    pub async fn refetch(&mut self) {
        self.fetch().await;
    }
}
