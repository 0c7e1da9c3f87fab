//! Traits for resolving descriptors and probing the shape of resolved types.

use crate::descriptor::TypeDescriptor;

/// Outcome of resolving a descriptor.
///
/// `Unresolved` is not an error: the classifier turns it into
/// [`SchemaKind::Object`](crate::SchemaKind::Object).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Resolution::Resolved(t) => Some(t),
            Resolution::Unresolved => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Resolved(t) => Resolution::Resolved(f(t)),
            Resolution::Unresolved => Resolution::Unresolved,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Resolution::Resolved(t),
            None => Resolution::Unresolved,
        }
    }
}

/// Structural facts about a resolved type.
///
/// `string` is the string identity in use (see
/// [`KnownTypes::string`](crate::KnownTypes)), so implementors don't hardcode it.
pub trait TypeShape {
    /// Whether the type is an enumeration.
    fn is_enum(&self) -> bool;

    /// Whether the type has a public constructor taking a single `string`.
    fn has_string_constructor(&self, string: &str) -> bool;

    /// Whether the type declares a static method `name(string)`.
    ///
    /// Declared methods of any visibility count.
    fn has_static_string_factory(&self, name: &str, string: &str) -> bool;
}

impl<T: TypeShape + ?Sized> TypeShape for &T {
    fn is_enum(&self) -> bool {
        (**self).is_enum()
    }

    fn has_string_constructor(&self, string: &str) -> bool {
        (**self).has_string_constructor(string)
    }

    fn has_static_string_factory(&self, name: &str, string: &str) -> bool {
        (**self).has_static_string_factory(name, string)
    }
}

/// Maps descriptors to inspectable types.
///
/// Implementations may be backed by a runtime, by static bytecode analysis, or
/// by a hand-built [`TypeTable`](crate::TypeTable).
pub trait TypeResolver {
    type Type: TypeShape;

    fn resolve(&self, descriptor: &TypeDescriptor) -> Resolution<Self::Type>;
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    type Type = R::Type;

    fn resolve(&self, descriptor: &TypeDescriptor) -> Resolution<Self::Type> {
        (**self).resolve(descriptor)
    }
}

/// Resolver that knows no types; every reference type classifies as object.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

/// Shape of a type that can never be produced.
#[derive(Debug, Clone, Copy)]
pub enum Never {}

impl TypeShape for Never {
    fn is_enum(&self) -> bool {
        match *self {}
    }

    fn has_string_constructor(&self, _string: &str) -> bool {
        match *self {}
    }

    fn has_static_string_factory(&self, _name: &str, _string: &str) -> bool {
        match *self {}
    }
}

impl TypeResolver for NoResolver {
    type Type = Never;

    fn resolve(&self, _descriptor: &TypeDescriptor) -> Resolution<Never> {
        Resolution::Unresolved
    }
}
