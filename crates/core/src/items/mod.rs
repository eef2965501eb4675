//! Items service ports

pub mod ports;

pub use ports::{Item, ItemUpdate, ItemsRepository, NewItem};
