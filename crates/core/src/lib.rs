//! testgate - Test class eligibility and data source path resolution
//!
//! This crate provides functionality to:
//! - Decide from reflected type metadata whether a type is a runnable test class
//! - Resolve `|DataDirectory|\` data source paths against prioritized folders
//! - Load the folders and well-known type names from a JSON config file
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod interfaces;
pub mod services;
pub mod types;
pub mod validation;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use data::{DATA_DIRECTORY_TOKEN, DataSourcePathResolver, path_needs_fixup};
pub use interfaces::{AttributeQuery, PathResolver};
pub use services::{FsPathResolver, MetadataAttributeQuery};
pub use validation::{ClassEligibilityFilter, ClassWarning, DiscoveryReport};
