//! Data source path fixup
//!
//! Data-driven tests name their data files with a `|DataDirectory|\` prefix.
//! This module turns such a name into a concrete file path.

mod connection_string;
mod path_fixup;

pub use connection_string::PATH_KEYS;
pub use path_fixup::{
    DATA_DIRECTORY_TOKEN, DataSourcePathResolver, path_needs_fixup, relative_part,
};
