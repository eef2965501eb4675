//! # Trackboard Domain
//!
//! Business domain types and models for Trackboard.
//!
//! This crate contains:
//! - Record types for the tracked collections (daily statuses, deployments,
//!   Sonar fixes, unit-test improvements, sprints, merge requests)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Fixture data generation and domain constants
//!
//! ## Architecture
//! - No dependencies on other Trackboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod fields;
pub mod fixtures;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use fields::{FieldAccess, FieldValue};
pub use types::*;
