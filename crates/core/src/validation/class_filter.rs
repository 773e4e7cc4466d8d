//! Decides from reflected metadata whether a type is a runnable test class

use super::ClassWarning;
use crate::{
    interfaces::AttributeQuery,
    services::MetadataAttributeQuery,
    types::{TypeDescriptor, ValidationOutcome},
};

pub const DEFAULT_MARKER_ATTRIBUTE: &str =
    "Microsoft.VisualStudio.TestTools.UnitTesting.TestClassAttribute";
pub const DEFAULT_TEST_CONTEXT_TYPE: &str =
    "Microsoft.VisualStudio.TestTools.UnitTesting.TestContext";

/// Filters candidate types down to runnable test classes.
///
/// Rules are applied in a fixed order and the first one that applies decides
/// the outcome:
///
/// 1. not a class, or no marker attribute (direct, derived, or carried by an
///    ancestor): silent skip
/// 2. neither public nor nested-public: [`ClassWarning::NonPublicOrOpenGenericClass`]
/// 3. open generic and not abstract: [`ClassWarning::NonPublicOrOpenGenericClass`]
/// 4. bad TestContext property: [`ClassWarning::InvalidTestContextSignature`]
/// 5. abstract: silent skip
/// 6. valid
pub struct ClassEligibilityFilter<Q = MetadataAttributeQuery> {
    query: Q,
    marker_attribute: String,
    test_context_type: String,
}

/// Outcome of filtering a batch of candidate types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Full names of the valid test classes, in input order
    pub valid: Vec<String>,
    pub warnings: Vec<String>,
}

impl ClassEligibilityFilter<MetadataAttributeQuery> {
    pub fn new() -> Self {
        Self::with_query(MetadataAttributeQuery::new())
    }
}

impl Default for ClassEligibilityFilter<MetadataAttributeQuery> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: AttributeQuery> ClassEligibilityFilter<Q> {
    pub fn with_query(query: Q) -> Self {
        Self {
            query,
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_string(),
            test_context_type: DEFAULT_TEST_CONTEXT_TYPE.to_string(),
        }
    }

    pub fn with_marker_attribute(mut self, marker: impl Into<String>) -> Self {
        self.marker_attribute = marker.into();
        self
    }

    pub fn with_test_context_type(mut self, type_name: impl Into<String>) -> Self {
        self.test_context_type = type_name.into();
        self
    }

    pub fn marker_attribute(&self) -> &str {
        &self.marker_attribute
    }

    pub fn test_context_type(&self) -> &str {
        &self.test_context_type
    }

    pub fn evaluate(&self, ty: &TypeDescriptor) -> ValidationOutcome {
        if !self.is_candidate(ty) {
            tracing::trace!("Skipping {}: not a marked class", ty.full_name);
            return ValidationOutcome::skipped();
        }

        if !ty.is_public_or_nested_public() {
            tracing::debug!("Rejecting {}: not public", ty.full_name);
            return ValidationOutcome::rejected(
                ClassWarning::NonPublicOrOpenGenericClass(ty.full_name.clone()).to_string(),
            );
        }

        // Open generics reuse the non-public wording
        if ty.is_generic_definition && !ty.is_abstract {
            tracing::debug!("Rejecting {}: open generic definition", ty.full_name);
            return ValidationOutcome::rejected(
                ClassWarning::NonPublicOrOpenGenericClass(ty.full_name.clone()).to_string(),
            );
        }

        if !self.has_correct_test_context_signature(ty) {
            tracing::debug!("Rejecting {}: invalid TestContext property", ty.full_name);
            return ValidationOutcome::rejected(
                ClassWarning::InvalidTestContextSignature(ty.full_name.clone()).to_string(),
            );
        }

        // Abstract bases surface their tests through derived classes
        if ty.is_abstract {
            tracing::trace!("Skipping {}: abstract", ty.full_name);
            return ValidationOutcome::skipped();
        }

        ValidationOutcome::valid()
    }

    /// A type without any TestContext-typed declared property is fine; when
    /// there are some, every one of them needs a public instance setter.
    pub fn has_correct_test_context_signature(&self, ty: &TypeDescriptor) -> bool {
        ty.declared_properties
            .iter()
            .filter(|property| {
                property.type_full_name.as_deref() == Some(self.test_context_type.as_str())
            })
            .all(|property| property.setter.is_some_and(|setter| setter.is_usable()))
    }

    /// Evaluate every type, collecting valid names and all warnings in input order
    pub fn filter_candidates<'a, I>(&self, types: I) -> DiscoveryReport
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        let mut report = DiscoveryReport::default();
        for ty in types {
            let outcome = self.evaluate(ty);
            if outcome.is_valid {
                report.valid.push(ty.full_name.clone());
            }
            report.warnings.extend(outcome.warnings);
        }

        tracing::debug!(
            "Found {} test classes ({} warnings)",
            report.valid.len(),
            report.warnings.len()
        );
        report
    }

    fn is_candidate(&self, ty: &TypeDescriptor) -> bool {
        ty.is_class
            && (self.query.is_attribute_defined(ty, &self.marker_attribute, true)
                || self.query.has_attribute_derived_from(ty, &self.marker_attribute, true))
    }
}
