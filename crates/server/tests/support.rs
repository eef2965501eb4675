use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use trackboard_core::StatePersistence;
use trackboard_domain::constants::STORAGE_KEY;
use trackboard_domain::{fixtures, Config};
use trackboard_infra::JsonStateFile;
use trackboard_server::{api_router, AppContext};

/// A router wired to a fresh context over a temporary data directory.
pub struct TestApp {
    pub router: Router,
    /// Keep the temporary directory alive for the lifetime of the app.
    _temp_dir: TempDir,
}

/// Build a test app seeded with reproducible fixture data.
pub async fn test_app_seeded(seed: u64) -> TestApp {
    let temp_dir = TempDir::new().expect("failed to create temporary data directory");

    let persistence = JsonStateFile::new(temp_dir.path(), STORAGE_KEY);
    persistence
        .save(&fixtures::sample_state_seeded(seed))
        .await
        .expect("failed to seed persisted state");

    let mut config = Config::default();
    config.storage.data_dir = temp_dir.path().display().to_string();

    let ctx = AppContext::new(config).await.expect("failed to build application context");

    TestApp { router: api_router().with_state(Arc::new(ctx)), _temp_dir: temp_dir }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.expect("body collected").to_bytes();
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}
