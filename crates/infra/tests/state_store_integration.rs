use std::sync::Arc;

use tempfile::TempDir;
use trackboard_core::{StatePatch, StatePersistence, StateStore};
use trackboard_domain::constants::STORAGE_KEY;
use trackboard_domain::types::{Deployment, DeploymentStatus, Environment};
use trackboard_infra::JsonStateFile;

fn deployment(id: &str) -> Deployment {
    Deployment {
        id: id.to_string(),
        squad_number: "Squad 2".to_string(),
        details: "Deploy v1.4 with new feature X".to_string(),
        environment: Environment::Uat,
        date: "2024-04-18".parse().expect("valid date"),
        status: DeploymentStatus::Completed,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn first_open_seeds_fixtures_and_writes_the_blob() {
    let temp_dir = TempDir::new().expect("temp dir created");
    let persistence = Arc::new(JsonStateFile::new(temp_dir.path(), STORAGE_KEY));

    let store = StateStore::open(Arc::clone(&persistence) as Arc<dyn StatePersistence>)
        .await
        .expect("store opened");

    assert_eq!(store.state().users.len(), 8);
    assert!(persistence.path().is_file(), "seed state persisted");
}

#[tokio::test(flavor = "multi_thread")]
async fn reopening_reproduces_the_persisted_state_exactly() {
    let temp_dir = TempDir::new().expect("temp dir created");
    let persistence = Arc::new(JsonStateFile::new(temp_dir.path(), STORAGE_KEY));

    let mut store = StateStore::open(Arc::clone(&persistence) as Arc<dyn StatePersistence>)
        .await
        .expect("store opened");

    store
        .apply(StatePatch::new().deployments(vec![deployment("round-trip")]))
        .await
        .expect("patch applied");
    let committed = store.state().clone();
    drop(store);

    // A second open must observe the committed snapshot, not fresh fixtures.
    let reopened = StateStore::open(persistence as Arc<dyn StatePersistence>)
        .await
        .expect("store reopened");

    assert_eq!(reopened.state(), &committed);
    assert_eq!(reopened.state().deployments.len(), 1);
    assert_eq!(reopened.state().deployments[0].id, "round-trip");
}
