//! Port interface for the minimal items service
//!
//! Items live in process memory only: restarting the service discards them
//! and resets the id sequence to 1.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use trackboard_domain::Result;

/// An item with a server-assigned sequential id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Creation payload; the repository assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update; unspecified fields retain their prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Trait for the in-memory items store.
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>>;

    /// Fetch one item; a missing id is a `NotFound` error.
    async fn get(&self, id: i64) -> Result<Item>;

    async fn create(&self, item: NewItem) -> Result<Item>;

    /// Apply a partial update; a missing id is a `NotFound` error.
    async fn update(&self, id: i64, update: ItemUpdate) -> Result<Item>;

    /// Remove an item; a missing id is a `NotFound` error.
    async fn delete(&self, id: i64) -> Result<()>;
}
