//! Descriptor to schema kind classification.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. the string identity is `string`
//! 2. boolean identities are `boolean`
//! 3. the integer family is `integer`
//! 4. the floating-point family is `number`
//! 5. anything else is resolved; unresolvable types are `object`
//! 6. resolved types are classified by shape with [`TypeClassifier::classify_resolved`]
//!
//! Arrays have no rule of their own and go through resolution like any other
//! reference type.

use crate::descriptor::{KnownTypes, TypeDescriptor};
use crate::kind::SchemaKind;
use crate::traits::{NoResolver, Resolution, TypeResolver, TypeShape};

/// Static factories recognised as "construct from string", in lookup order.
pub const STRING_FACTORIES: [&str; 2] = ["valueOf", "fromString"];

/// Maps type descriptors to [`SchemaKind`].
///
/// Stateless apart from its configuration; classification never fails.
#[derive(Debug, Clone)]
pub struct TypeClassifier<R = NoResolver> {
    known: KnownTypes,
    resolver: R,
}

impl TypeClassifier<NoResolver> {
    /// Classifier that only knows the built-in identities.
    pub fn without_resolver() -> Self {
        Self::new(NoResolver)
    }
}

impl Default for TypeClassifier<NoResolver> {
    fn default() -> Self {
        Self::without_resolver()
    }
}

impl<R: TypeResolver> TypeClassifier<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            known: KnownTypes::jvm(),
            resolver,
        }
    }

    pub fn with_known(mut self, known: KnownTypes) -> Self {
        self.known = known;
        self
    }

    pub fn known(&self) -> &KnownTypes {
        &self.known
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Classify a descriptor.
    pub fn classify(&self, descriptor: &TypeDescriptor) -> SchemaKind {
        let d = descriptor.as_str();
        if self.known.is_string(d) {
            return SchemaKind::String;
        }
        if self.known.is_boolean(d) {
            return SchemaKind::Boolean;
        }
        if self.known.is_integer(d) {
            return SchemaKind::Integer;
        }
        if self.known.is_float(d) {
            return SchemaKind::Number;
        }

        match self.resolver.resolve(descriptor) {
            Resolution::Resolved(ty) => self.classify_resolved(Some(&ty)),
            Resolution::Unresolved => {
                tracing::debug!(
                    target: "schemakind::classify",
                    descriptor = %descriptor,
                    "unresolved type, defaulting to object"
                );
                SchemaKind::Object
            }
        }
    }

    /// Classify a type that has already been resolved. `None` is `object`.
    pub fn classify_resolved<T: TypeShape>(&self, ty: Option<&T>) -> SchemaKind {
        let Some(ty) = ty else {
            return SchemaKind::Object;
        };
        let string = self.known.string;

        if ty.is_enum() || ty.has_string_constructor(string) {
            return SchemaKind::String;
        }
        if STRING_FACTORIES
            .iter()
            .any(|name| ty.has_static_string_factory(name, string))
        {
            return SchemaKind::String;
        }
        SchemaKind::Object
    }

    /// Classify each descriptor, preserving order.
    pub fn classify_all<'d, I>(&self, descriptors: I) -> Vec<(&'d TypeDescriptor, SchemaKind)>
    where
        I: IntoIterator<Item = &'d TypeDescriptor>,
    {
        descriptors
            .into_iter()
            .map(|d| (d, self.classify(d)))
            .collect()
    }
}
