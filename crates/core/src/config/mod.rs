//! Configuration management for testgate

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config};
