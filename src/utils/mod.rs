//! Utility modules: number formatting and log setup.

pub mod format;
pub mod logging;

pub use format::{format_number, time_text};
