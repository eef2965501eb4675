//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::info;
use trackboard_core::{CollectionStore, ItemsRepository, StatePersistence, StateStore};
use trackboard_domain::{BackendMode, Config, Result, TrackboardError};
use trackboard_infra::{
    InMemoryItemsRepository, JsonStateFile, LocalBackend, RemoteBackend, RemoteBackendConfig,
    SharedStateStore,
};

/// Type alias for the collection store trait object
type DynCollectionStore = dyn CollectionStore + 'static;

/// Type alias for the items repository trait object
type DynItemsRepository = dyn ItemsRepository + 'static;

/// Application context - holds all services and dependencies.
///
/// Owned by the application root and passed to handlers explicitly; nothing
/// in the system reaches for ambient global state.
pub struct AppContext {
    pub config: Config,
    pub store: SharedStateStore,
    pub collections: Arc<DynCollectionStore>,
    pub items: Arc<DynItemsRepository>,
}

impl AppContext {
    /// Initialize the context: open the persisted state store and wire the
    /// configured collection backend.
    pub async fn new(config: Config) -> Result<Self> {
        let persistence =
            Arc::new(JsonStateFile::new(&config.storage.data_dir, &config.storage.storage_key));

        let store =
            StateStore::open(Arc::clone(&persistence) as Arc<dyn StatePersistence>).await?;
        let store: SharedStateStore = Arc::new(RwLock::new(store));

        let collections: Arc<DynCollectionStore> = match config.backend.mode {
            BackendMode::Local => Arc::new(LocalBackend::new(Arc::clone(&store))),
            BackendMode::Remote => {
                let base_url = config.backend.base_url.clone().ok_or_else(|| {
                    TrackboardError::Config(
                        "remote backend mode requires backend.base_url".to_string(),
                    )
                })?;

                Arc::new(RemoteBackend::new(RemoteBackendConfig {
                    base_url,
                    api_key: config.backend.api_key.clone(),
                    timeout: Duration::from_secs(config.backend.timeout_seconds),
                    max_attempts: 1,
                })?)
            }
        };

        let items: Arc<DynItemsRepository> = Arc::new(InMemoryItemsRepository::new());

        info!(mode = ?config.backend.mode, "application context initialised");

        Ok(Self { config, store, collections, items })
    }
}
