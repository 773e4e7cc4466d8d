use serde::{Deserialize, Serialize};

/// Reflected shape of a candidate type, as handed over by the metadata layer.
///
/// Descriptors are transient: one is built per examined type, consumed by a
/// single evaluation and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeDescriptor {
    pub full_name: String,
    #[serde(default)]
    pub is_class: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_nested: bool,
    #[serde(default)]
    pub is_nested_public: bool,
    #[serde(default)]
    pub is_generic_definition: bool,
    #[serde(default)]
    pub is_abstract: bool,
    /// Attributes declared directly on the type
    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
    /// Attributes only visible through the type's ancestors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inherited_attributes: Vec<AttributeDescriptor>,
    /// Properties declared on this type, in declaration order (not inherited)
    #[serde(default)]
    pub declared_properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Create a public, non-generic, concrete class with no attributes
    pub fn class(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            is_class: true,
            is_public: true,
            ..Default::default()
        }
    }

    /// Public at top level, or nested and declared public
    pub fn is_public_or_nested_public(&self) -> bool {
        self.is_public || (self.is_nested && self.is_nested_public)
    }

    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.declared_properties.push(property);
        self
    }
}

/// An attribute instance applied to a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AttributeDescriptor {
    pub full_name: String,
    /// Full names of the attribute's base classes, nearest first
    #[serde(default)]
    pub base_types: Vec<String>,
}

impl AttributeDescriptor {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            base_types: Vec::new(),
        }
    }

    pub fn derived_from(mut self, base: impl Into<String>) -> Self {
        self.base_types.push(base.into());
        self
    }

    /// Whether `name` is this attribute's type or one of its ancestors
    pub fn is_or_derives_from(&self, name: &str) -> bool {
        self.full_name == name || self.derives_from(name)
    }

    pub fn derives_from(&self, name: &str) -> bool {
        self.base_types.iter().any(|base| base == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PropertyDescriptor {
    pub name: String,
    /// `None` when the property's type has no full name (open generic parameter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<SetterDescriptor>,
}

impl PropertyDescriptor {
    /// A read-only property of the given type
    pub fn new(name: impl Into<String>, type_full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_full_name: Some(type_full_name.into()),
            setter: None,
        }
    }

    pub fn with_setter(mut self, setter: SetterDescriptor) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }
}

/// Modifiers of a property's set accessor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SetterDescriptor {
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
}

impl SetterDescriptor {
    /// A public instance setter with a body
    pub fn public() -> Self {
        Self::default()
    }

    pub fn private() -> Self {
        Self {
            is_private: true,
            ..Self::default()
        }
    }

    pub fn is_usable(&self) -> bool {
        !(self.is_private || self.is_static || self.is_abstract)
    }
}
