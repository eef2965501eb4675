//! Time display utilities

pub mod format;

pub use format::{format_display_date, format_display_datetime};
