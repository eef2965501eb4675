//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Storage key for the persisted application state blob.
pub const STORAGE_KEY: &str = "tracking-app-data";

/// Sentinel filter value meaning "no constraint".
pub const FILTER_ALL: &str = "all";

/// Display value substituted when a foreign-key lookup fails.
pub const UNKNOWN_USER: &str = "Unknown";

// Dashboard summary configuration
pub const RECENT_ITEMS_LIMIT: usize = 5;
pub const TOP_COVERAGE_LIMIT: usize = 3;

// Server defaults
pub const DEFAULT_SERVER_PORT: u16 = 4000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
