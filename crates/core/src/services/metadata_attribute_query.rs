//! Attribute queries answered from descriptor metadata

use crate::interfaces::AttributeQuery;
use crate::types::{AttributeDescriptor, TypeDescriptor};

/// Answers [`AttributeQuery`] from the attribute lists carried on a
/// [`TypeDescriptor`]. Inherited attributes are only consulted when the
/// caller asks for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataAttributeQuery;

impl MetadataAttributeQuery {
    pub fn new() -> Self {
        Self
    }

    fn visible<'a>(
        ty: &'a TypeDescriptor,
        inherit: bool,
    ) -> impl Iterator<Item = &'a AttributeDescriptor> {
        let inherited: &[AttributeDescriptor] = if inherit {
            &ty.inherited_attributes
        } else {
            &[]
        };
        ty.attributes.iter().chain(inherited)
    }
}

impl AttributeQuery for MetadataAttributeQuery {
    fn is_attribute_defined(&self, ty: &TypeDescriptor, marker: &str, inherit: bool) -> bool {
        Self::visible(ty, inherit).any(|attr| attr.full_name == marker)
    }

    fn has_attribute_derived_from(&self, ty: &TypeDescriptor, marker: &str, inherit: bool) -> bool {
        Self::visible(ty, inherit).any(|attr| attr.derives_from(marker))
    }
}
