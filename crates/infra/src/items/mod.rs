//! Items repository implementations

pub mod memory;

pub use memory::InMemoryItemsRepository;
