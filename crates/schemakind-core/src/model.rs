//! Plain-data description of a resolved type.

use crate::descriptor::TypeDescriptor;
use crate::traits::TypeShape;
use serde::{Deserialize, Serialize};

/// Access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// A declared constructor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Constructor {
    #[serde(default)]
    pub params: Vec<TypeDescriptor>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Constructor {
    /// Public constructor with the given parameters.
    pub fn public<I, D>(params: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<TypeDescriptor>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            visibility: Visibility::Public,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// A declared method (inherited methods are not listed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub params: Vec<TypeDescriptor>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Method {
    /// Public instance method.
    pub fn instance<I, D>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<TypeDescriptor>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            is_static: false,
            visibility: Visibility::Public,
        }
    }

    /// Public static method.
    pub fn static_method<I, D>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<TypeDescriptor>,
    {
        Self {
            is_static: true,
            ..Self::instance(name, params)
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Structural facts about one type: enum-ness, constructors, declared methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeInfo {
    pub descriptor: TypeDescriptor,
    #[serde(default, rename = "enum")]
    pub is_enum: bool,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl TypeInfo {
    pub fn new(descriptor: impl Into<TypeDescriptor>) -> Self {
        Self {
            descriptor: descriptor.into(),
            is_enum: false,
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn enumeration(mut self) -> Self {
        self.is_enum = true;
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

fn is_single(params: &[TypeDescriptor], string: &str) -> bool {
    matches!(params, [only] if only.as_str() == string)
}

impl TypeShape for TypeInfo {
    fn is_enum(&self) -> bool {
        self.is_enum
    }

    fn has_string_constructor(&self, string: &str) -> bool {
        self.constructors
            .iter()
            .any(|c| c.visibility == Visibility::Public && is_single(&c.params, string))
    }

    fn has_static_string_factory(&self, name: &str, string: &str) -> bool {
        // A type can't declare two methods with the same name and parameters,
        // so the first match decides.
        self.methods
            .iter()
            .find(|m| m.name == name && is_single(&m.params, string))
            .is_some_and(|m| m.is_static)
    }
}
