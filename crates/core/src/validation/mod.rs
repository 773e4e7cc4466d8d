//! Test class eligibility rules

mod class_filter;
mod warnings;

pub use class_filter::{
    ClassEligibilityFilter, DEFAULT_MARKER_ATTRIBUTE, DEFAULT_TEST_CONTEXT_TYPE, DiscoveryReport,
};
pub use warnings::ClassWarning;
