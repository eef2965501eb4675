//! Application state store
//!
//! Holds the complete snapshot of every tracked collection, seeded from the
//! persisted blob (or generated fixtures on first run), and applies
//! shallow-merge patches that replace whole collections. Every applied patch
//! persists the full state back through the [`ports::StatePersistence`]
//! port before returning.

pub mod ports;
mod service;

pub use service::{StatePatch, StateStore};
