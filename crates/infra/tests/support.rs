use std::sync::Arc;

use tempfile::TempDir;
use tokio::sync::RwLock;
use trackboard_core::{StatePersistence, StateStore};
use trackboard_domain::constants::STORAGE_KEY;
use trackboard_domain::fixtures;
use trackboard_infra::{JsonStateFile, LocalBackend, SharedStateStore};

/// Shared context for integration tests that need a seeded local backend.
pub struct TestContext {
    /// Backend under test.
    pub backend: LocalBackend,
    /// Shared store for direct state assertions.
    pub store: SharedStateStore,
    /// Persistence handle for reopening the blob.
    pub persistence: Arc<JsonStateFile>,
    /// Keep the temporary directory alive for the lifetime of the context.
    _temp_dir: TempDir,
}

/// Create a test context seeded with reproducible fixture data.
pub async fn setup_seeded_context(seed: u64) -> TestContext {
    let temp_dir = TempDir::new().expect("failed to create temporary data directory");
    let persistence = Arc::new(JsonStateFile::new(temp_dir.path(), STORAGE_KEY));

    let state = fixtures::sample_state_seeded(seed);
    persistence.save(&state).await.expect("failed to seed persisted state");

    let store = StateStore::open(Arc::clone(&persistence) as Arc<dyn StatePersistence>)
        .await
        .expect("failed to open state store");
    let store: SharedStateStore = Arc::new(RwLock::new(store));

    TestContext {
        backend: LocalBackend::new(Arc::clone(&store)),
        store,
        persistence,
        _temp_dir: temp_dir,
    }
}
