//! In-memory items repository.
//!
//! Process-memory only: restarting the service discards all items and the
//! id sequence starts over at 1. The mutex never crosses an await point.

use async_trait::async_trait;
use parking_lot::Mutex;
use trackboard_core::{Item, ItemUpdate, ItemsRepository, NewItem};
use trackboard_domain::{Result, TrackboardError};

const NOT_FOUND_MESSAGE: &str = "Item not found";

struct ItemsState {
    items: Vec<Item>,
    next_id: i64,
}

/// Items kept in process memory behind a mutex.
pub struct InMemoryItemsRepository {
    inner: Mutex<ItemsState>,
}

impl InMemoryItemsRepository {
    pub fn new() -> Self {
        Self { inner: Mutex::new(ItemsState { items: Vec::new(), next_id: 1 }) }
    }
}

impl Default for InMemoryItemsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemsRepository for InMemoryItemsRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.inner.lock().items.clone())
    }

    async fn get(&self, id: i64) -> Result<Item> {
        self.inner
            .lock()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| TrackboardError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        let mut state = self.inner.lock();
        let created = Item { id: state.next_id, name: item.name, description: item.description };
        state.next_id += 1;
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, update: ItemUpdate) -> Result<Item> {
        let mut state = self.inner.lock();
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| TrackboardError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(description) = update.description {
            item.description = description;
        }

        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.inner.lock();
        let index = state
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| TrackboardError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;
        state.items.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str) -> NewItem {
        NewItem { name: name.to_string(), description: format!("{name} description") }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let repo = InMemoryItemsRepository::new();

        let first = repo.create(new_item("first")).await.expect("created");
        let second = repo.create(new_item("second")).await.expect("created");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().await.expect("listed").len(), 2);
    }

    #[tokio::test]
    async fn partial_update_retains_unspecified_fields() {
        let repo = InMemoryItemsRepository::new();
        let created = repo.create(new_item("original")).await.expect("created");

        let updated = repo
            .update(created.id, ItemUpdate { name: Some("renamed".to_string()), description: None })
            .await
            .expect("updated");

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.description, "original description");
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = InMemoryItemsRepository::new();

        assert!(matches!(repo.get(99).await, Err(TrackboardError::NotFound(_))));
        assert!(matches!(
            repo.update(99, ItemUpdate::default()).await,
            Err(TrackboardError::NotFound(_))
        ));
        assert!(matches!(repo.delete(99).await, Err(TrackboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn deleted_items_are_gone() {
        let repo = InMemoryItemsRepository::new();
        let created = repo.create(new_item("short-lived")).await.expect("created");

        repo.delete(created.id).await.expect("deleted");
        assert!(matches!(repo.get(created.id).await, Err(TrackboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn a_fresh_repository_restarts_the_sequence() {
        let repo = InMemoryItemsRepository::new();
        repo.create(new_item("a")).await.expect("created");
        repo.create(new_item("b")).await.expect("created");

        let restarted = InMemoryItemsRepository::new();
        let first = restarted.create(new_item("c")).await.expect("created");
        assert_eq!(first.id, 1);
    }
}
