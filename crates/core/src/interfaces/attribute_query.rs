//! Attribute inspection interface
//!
//! The eligibility filter never touches a metadata system directly; it asks
//! these two questions through whatever layer the host provides.

use crate::types::TypeDescriptor;

/// Trait for attribute presence queries on a reflected type
pub trait AttributeQuery: Send + Sync {
    /// Is an attribute of exactly `marker` applied to `ty`
    fn is_attribute_defined(&self, ty: &TypeDescriptor, marker: &str, inherit: bool) -> bool;

    /// Is an attribute whose type derives from `marker` applied to `ty`
    fn has_attribute_derived_from(&self, ty: &TypeDescriptor, marker: &str, inherit: bool) -> bool;
}
