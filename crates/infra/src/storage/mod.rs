//! State persistence implementations

pub mod state_file;

pub use state_file::JsonStateFile;
