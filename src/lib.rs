//! Umbrella package re-exporting `testgate-core`
pub use testgate_core::*;
