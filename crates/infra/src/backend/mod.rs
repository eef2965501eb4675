//! Collection backends
//!
//! Two interchangeable implementations of the `CollectionStore` port: the
//! local state store and the remote hosted backend. Pages never know which
//! one is answering.

pub mod local;
pub mod remote;

use std::sync::Arc;

use tokio::sync::RwLock;
use trackboard_core::StateStore;

pub use local::LocalBackend;
pub use remote::{RemoteBackend, RemoteBackendConfig};

/// The state store as shared between the delivery layer and the local
/// backend. The async lock keeps apply's persist-await safe to hold.
pub type SharedStateStore = Arc<RwLock<StateStore>>;
