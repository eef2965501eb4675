//! JSON state-file persistence.
//!
//! Implements the `StatePersistence` port over a single JSON file named
//! after the fixed storage key: the whole state is read once at startup and
//! overwritten in full on every save. All file IO runs in `spawn_blocking`
//! to avoid blocking the async runtime.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;
use tracing::debug;
use trackboard_core::StatePersistence;
use trackboard_domain::{AppState, Result, TrackboardError};

/// File-backed persistence for the application state blob.
pub struct JsonStateFile {
    path: PathBuf,
}

impl JsonStateFile {
    /// Persistence rooted in `data_dir`, storing `<storage_key>.json`.
    pub fn new(data_dir: impl AsRef<Path>, storage_key: &str) -> Self {
        Self { path: data_dir.as_ref().join(format!("{storage_key}.json")) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StatePersistence for JsonStateFile {
    async fn load(&self) -> Result<Option<AppState>> {
        let path = self.path.clone();

        task::spawn_blocking(move || -> Result<Option<AppState>> {
            let blob = match fs::read_to_string(&path) {
                Ok(blob) => blob,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no persisted state file");
                    return Ok(None);
                }
                Err(err) => return Err(TrackboardError::Storage(err.to_string())),
            };

            let state = serde_json::from_str(&blob)
                .map_err(|err| TrackboardError::Serialization(err.to_string()))?;
            Ok(Some(state))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, state: &AppState) -> Result<()> {
        let path = self.path.clone();
        let blob = serde_json::to_string(state)
            .map_err(|err| TrackboardError::Serialization(err.to_string()))?;

        task::spawn_blocking(move || -> Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|err| TrackboardError::Storage(err.to_string()))?;
            }

            // Atomic replace: sibling temp file, then rename.
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, blob).map_err(|err| TrackboardError::Storage(err.to_string()))?;
            fs::rename(&tmp, &path).map_err(|err| TrackboardError::Storage(err.to_string()))?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map JoinError from spawn_blocking to TrackboardError.
fn map_join_error(err: task::JoinError) -> TrackboardError {
    if err.is_cancelled() {
        TrackboardError::Internal("blocking task cancelled".into())
    } else {
        TrackboardError::Internal(format!("blocking task failed: {err}"))
    }
}
