//! Type descriptors and the well-known identities recognised without resolution.
//!
//! Descriptors are kept opaque: they are compared as strings and handed to a
//! [`TypeResolver`](crate::TypeResolver) when no known identity matches.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// String-encoded identity of a type, e.g. `I` or `Ljava/lang/String;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the descriptor names an array type (`[` prefix).
    ///
    /// Arrays have no dedicated classification rule; this is informational.
    pub fn is_array(&self) -> bool {
        self.0.starts_with('[')
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeDescriptor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TypeDescriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeDescriptor {
    fn borrow(&self) -> &str {
        &self.0
    }
}

pub mod jvm {
    //! JVM descriptor constants.

    pub const STRING: &str = "Ljava/lang/String;";
    pub const OBJECT: &str = "Ljava/lang/Object;";

    pub const PRIMITIVE_BOOLEAN: &str = "Z";
    pub const BOOLEAN: &str = "Ljava/lang/Boolean;";

    pub const PRIMITIVE_BYTE: &str = "B";
    pub const PRIMITIVE_SHORT: &str = "S";
    pub const PRIMITIVE_INT: &str = "I";
    pub const PRIMITIVE_LONG: &str = "J";
    pub const BYTE: &str = "Ljava/lang/Byte;";
    pub const SHORT: &str = "Ljava/lang/Short;";
    pub const INTEGER: &str = "Ljava/lang/Integer;";
    pub const LONG: &str = "Ljava/lang/Long;";
    pub const BIG_INTEGER: &str = "Ljava/math/BigInteger;";

    pub const PRIMITIVE_FLOAT: &str = "F";
    pub const PRIMITIVE_DOUBLE: &str = "D";
    pub const FLOAT: &str = "Ljava/lang/Float;";
    pub const DOUBLE: &str = "Ljava/lang/Double;";
    pub const BIG_DECIMAL: &str = "Ljava/math/BigDecimal;";

    pub const PRIMITIVE_CHAR: &str = "C";
    pub const PRIMITIVE_VOID: &str = "V";
}

/// Identities classified by exact match before any resolution happens.
///
/// This is plain configuration data; [`KnownTypes::jvm`] is the default set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownTypes {
    pub string: &'static str,
    pub booleans: &'static [&'static str],
    pub integers: &'static [&'static str],
    pub floats: &'static [&'static str],
}

const JVM_BOOLEANS: &[&str] = &[jvm::PRIMITIVE_BOOLEAN, jvm::BOOLEAN];

const JVM_INTEGERS: &[&str] = &[
    jvm::PRIMITIVE_BYTE,
    jvm::PRIMITIVE_SHORT,
    jvm::PRIMITIVE_INT,
    jvm::PRIMITIVE_LONG,
    jvm::BYTE,
    jvm::SHORT,
    jvm::INTEGER,
    jvm::LONG,
    jvm::BIG_INTEGER,
];

const JVM_FLOATS: &[&str] = &[
    jvm::PRIMITIVE_FLOAT,
    jvm::PRIMITIVE_DOUBLE,
    jvm::FLOAT,
    jvm::DOUBLE,
    jvm::BIG_DECIMAL,
];

impl KnownTypes {
    /// Known identities of the Java platform.
    pub const fn jvm() -> Self {
        Self {
            string: jvm::STRING,
            booleans: JVM_BOOLEANS,
            integers: JVM_INTEGERS,
            floats: JVM_FLOATS,
        }
    }

    pub fn is_string(&self, descriptor: &str) -> bool {
        self.string == descriptor
    }

    pub fn is_boolean(&self, descriptor: &str) -> bool {
        self.booleans.contains(&descriptor)
    }

    pub fn is_integer(&self, descriptor: &str) -> bool {
        self.integers.contains(&descriptor)
    }

    pub fn is_float(&self, descriptor: &str) -> bool {
        self.floats.contains(&descriptor)
    }
}

impl Default for KnownTypes {
    fn default() -> Self {
        Self::jvm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_are_disjoint() {
        let known = KnownTypes::jvm();
        for d in known.integers {
            assert!(!known.is_float(d), "{} in both families", d);
            assert!(!known.is_boolean(d), "{} in both families", d);
        }
        assert!(!known.is_boolean(known.string));
    }

    #[test]
    fn test_char_is_not_known() {
        let known = KnownTypes::jvm();
        assert!(!known.is_integer(jvm::PRIMITIVE_CHAR));
        assert!(!known.is_string(jvm::PRIMITIVE_CHAR));
    }

    #[test]
    fn test_array_detection() {
        assert!(TypeDescriptor::from("[I").is_array());
        assert!(TypeDescriptor::from("[Ljava/lang/String;").is_array());
        assert!(!TypeDescriptor::from("I").is_array());
    }
}
