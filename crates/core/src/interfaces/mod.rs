//! Core interfaces
//!
//! Trait seams between the decision logic and its external collaborators.

pub mod attribute_query;
pub mod path_resolver;

pub use attribute_query::AttributeQuery;
pub use path_resolver::PathResolver;
