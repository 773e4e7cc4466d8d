//! Service implementations
//!
//! Concrete implementations of the interface traits backed by the
//! filesystem and by descriptor metadata.

pub mod default_path_resolver;
pub mod metadata_attribute_query;

pub use default_path_resolver::FsPathResolver;
pub use metadata_attribute_query::MetadataAttributeQuery;
