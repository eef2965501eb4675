//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. `TRACKBOARD_CONFIG` names an explicit config file when set
//! 2. Otherwise well-known paths are probed
//! 3. Environment variables override whatever the file supplied
//!
//! ## Environment Variables
//! - `TRACKBOARD_DATA_DIR`: directory for the persisted state blob
//! - `TRACKBOARD_BACKEND`: `local` or `remote`
//! - `TRACKBOARD_BACKEND_URL`: hosted backend base URL
//! - `TRACKBOARD_API_KEY`: hosted backend API key
//! - `TRACKBOARD_TIMEOUT_SECS`: request timeout in seconds
//! - `TRACKBOARD_HOST` / `TRACKBOARD_PORT`: bind address

use std::env;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use trackboard_domain::{BackendMode, Config, Result, TrackboardError};

const CONFIG_PATH_VAR: &str = "TRACKBOARD_CONFIG";
const DEFAULT_PATHS: [&str; 2] = ["trackboard.toml", "config/trackboard.toml"];

/// Load configuration: file first (when present), env overrides last.
pub fn load_config() -> Result<Config> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_from_file(Path::new(&path))?,
        Err(_) => probe_default_paths()?,
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok());
    Ok(config)
}

fn probe_default_paths() -> Result<Config> {
    for candidate in DEFAULT_PATHS {
        let path = Path::new(candidate);
        if path.is_file() {
            info!(path = %path.display(), "loading config file");
            return load_from_file(path);
        }
        debug!(path = %path.display(), "config file not present");
    }

    Ok(Config::default())
}

/// Parse a config file, JSON or TOML by extension.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .map_err(|err| TrackboardError::Config(format!("cannot read {}: {err}", path.display())))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&raw)
            .map_err(|err| TrackboardError::Config(format!("invalid JSON config: {err}")))
    } else {
        toml::from_str(&raw)
            .map_err(|err| TrackboardError::Config(format!("invalid TOML config: {err}")))
    }
}

/// Apply environment overrides through a lookup function (injectable for
/// tests; process env in production).
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(data_dir) = lookup("TRACKBOARD_DATA_DIR") {
        config.storage.data_dir = data_dir;
    }

    if let Some(mode) = lookup("TRACKBOARD_BACKEND") {
        match mode.to_ascii_lowercase().as_str() {
            "local" => config.backend.mode = BackendMode::Local,
            "remote" => config.backend.mode = BackendMode::Remote,
            other => debug!(mode = other, "ignoring unrecognized backend mode"),
        }
    }

    if let Some(base_url) = lookup("TRACKBOARD_BACKEND_URL") {
        config.backend.base_url = Some(base_url);
    }

    if let Some(api_key) = lookup("TRACKBOARD_API_KEY") {
        config.backend.api_key = Some(api_key);
    }

    if let Some(timeout) = lookup("TRACKBOARD_TIMEOUT_SECS") {
        if let Ok(seconds) = timeout.parse() {
            config.backend.timeout_seconds = seconds;
        }
    }

    if let Some(host) = lookup("TRACKBOARD_HOST") {
        config.server.host = host;
    }

    if let Some(port) = lookup("TRACKBOARD_PORT") {
        if let Ok(port) = port.parse() {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn toml_file_parses_partial_sections() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let path = dir.path().join("trackboard.toml");
        fs::write(
            &path,
            r#"
[backend]
mode = "remote"
base_url = "https://backend.example"

[server]
port = 8088
"#,
        )
        .expect("config written");

        let config = load_from_file(&path).expect("config parsed");
        assert_eq!(config.backend.mode, BackendMode::Remote);
        assert_eq!(config.backend.base_url.as_deref(), Some("https://backend.example"));
        assert_eq!(config.server.port, 8088);
        // Unspecified sections keep their defaults.
        assert_eq!(config.storage.data_dir, ".");
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config = Config::default();
        let env: HashMap<&str, &str> = HashMap::from([
            ("TRACKBOARD_DATA_DIR", "/var/lib/trackboard"),
            ("TRACKBOARD_BACKEND", "remote"),
            ("TRACKBOARD_BACKEND_URL", "https://backend.example"),
            ("TRACKBOARD_API_KEY", "secret"),
            ("TRACKBOARD_TIMEOUT_SECS", "5"),
            ("TRACKBOARD_PORT", "9001"),
        ]);

        apply_env_overrides(&mut config, |key| env.get(key).map(|value| (*value).to_string()));

        assert_eq!(config.storage.data_dir, "/var/lib/trackboard");
        assert_eq!(config.backend.mode, BackendMode::Remote);
        assert_eq!(config.backend.api_key.as_deref(), Some("secret"));
        assert_eq!(config.backend.timeout_seconds, 5);
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn unparseable_numbers_keep_defaults() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, |key| {
            (key == "TRACKBOARD_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.server.port, trackboard_domain::constants::DEFAULT_SERVER_PORT);
    }
}
