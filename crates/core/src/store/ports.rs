//! Port interface for state persistence

use async_trait::async_trait;
use trackboard_domain::{AppState, Result};

/// Trait for persisting the full application state blob.
#[async_trait]
pub trait StatePersistence: Send + Sync {
    /// Read the persisted state, `None` when nothing was ever saved.
    async fn load(&self) -> Result<Option<AppState>>;

    /// Overwrite the persisted state with a full serialization.
    async fn save(&self, state: &AppState) -> Result<()>;
}
