//! Classify JVM type descriptors into JSON schema primitive kinds.
//!
//! `schemakind-core` decides which `"type"` keyword a generated API schema uses
//! for a given parameter or field type. Well-known identities (strings,
//! booleans, the integer and floating-point families) are matched directly;
//! everything else is resolved through a [`TypeResolver`] and classified by
//! shape.
//!
//! ```text
//! descriptor ─> known identity? ─────────────────────────────> SchemaKind
//!                    │ no
//!                    └─> TypeResolver::resolve ─> TypeShape ─> SchemaKind
//!                              │ unresolved
//!                              └────────────────────────────> object
//! ```
//!
//! # Example
//!
//! ```
//! use schemakind_core::{SchemaKind, TypeClassifier, TypeInfo, TypeTable, Constructor};
//!
//! let mut table = TypeTable::jdk();
//! table.insert(
//!     TypeInfo::new("Lcom/example/UserId;")
//!         .constructor(Constructor::public(["Ljava/lang/String;"])),
//! );
//!
//! let classifier = TypeClassifier::new(&table);
//! assert_eq!(classifier.classify(&"J".into()), SchemaKind::Integer);
//! assert_eq!(classifier.classify(&"Lcom/example/UserId;".into()), SchemaKind::String);
//! assert_eq!(classifier.classify(&"Ljava/util/UUID;".into()), SchemaKind::String);
//! assert_eq!(classifier.classify(&"Lcom/example/Unknown;".into()), SchemaKind::Object);
//! ```
//!
//! # Heuristics
//!
//! A type is treated as a string when it is an enum, has a public constructor
//! taking one string, or declares a static `valueOf(String)` or
//! `fromString(String)`. These accept false positives: `StringBuilder` has a
//! string constructor and classifies as `string`.

pub mod classifier;
pub mod descriptor;
pub mod kind;
pub mod model;
pub mod table;
pub mod traits;

pub use classifier::{STRING_FACTORIES, TypeClassifier};
pub use descriptor::{KnownTypes, TypeDescriptor, jvm};
pub use kind::{SchemaKind, UnknownKind};
pub use model::{Constructor, Method, TypeInfo, Visibility};
pub use table::{TableError, TypeTable};
pub use traits::{NoResolver, Resolution, TypeResolver, TypeShape};
