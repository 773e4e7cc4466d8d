pub mod outcome;
pub mod type_descriptor;

// Re-export commonly used types
pub use outcome::ValidationOutcome;
pub use type_descriptor::{
    AttributeDescriptor, PropertyDescriptor, SetterDescriptor, TypeDescriptor,
};
