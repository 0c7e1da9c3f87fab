//! Hand-built type tables.
//!
//! A [`TypeTable`] answers resolution requests from a fixed set of [`TypeInfo`]
//! entries, either built in code, loaded from TOML, or taken from the bundled
//! JDK table.
//!
//! ```toml
//! [[types]]
//! descriptor = "Lcom/example/UserId;"
//! constructors = [{ params = ["Ljava/lang/String;"] }]
//!
//! [[types]]
//! descriptor = "Lcom/example/Status;"
//! enum = true
//! ```

use crate::descriptor::{TypeDescriptor, jvm};
use crate::model::{Constructor, Method, TypeInfo, Visibility};
use crate::traits::{Resolution, TypeResolver};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Error loading a type table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read type table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid type table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("type {0} is listed more than once")]
    DuplicateDescriptor(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    types: Vec<TypeInfo>,
}

/// Descriptor-keyed collection of [`TypeInfo`].
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: HashMap<TypeDescriptor, TypeInfo>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type, replacing any previous entry for the same descriptor.
    pub fn insert(&mut self, info: TypeInfo) -> Option<TypeInfo> {
        self.types.insert(info.descriptor.clone(), info)
    }

    pub fn get(&self, descriptor: &str) -> Option<&TypeInfo> {
        self.types.get(descriptor)
    }

    pub fn contains(&self, descriptor: &str) -> bool {
        self.types.contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Merge `other` into this table. Entries from `other` win.
    pub fn extend(&mut self, other: TypeTable) {
        self.types.extend(other.types);
    }

    /// Entries sorted by descriptor.
    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        let mut entries: Vec<_> = self.types.values().collect();
        entries.sort_by(|a, b| a.descriptor.cmp(&b.descriptor));
        entries.into_iter()
    }

    /// Parse a TOML table document.
    pub fn from_toml_str(input: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(input)?;
        let mut table = Self::new();
        for info in file.types {
            let descriptor = info.descriptor.to_string();
            if table.insert(info).is_some() {
                return Err(TableError::DuplicateDescriptor(descriptor));
            }
        }
        Ok(table)
    }

    /// Read and parse a TOML table file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), types = table.len(), "loaded type table");
        Ok(table)
    }

    /// Common JDK value types, with the members the JVM reports for them.
    pub fn jdk() -> Self {
        let mut table = Self::new();
        for info in jdk_types() {
            table.insert(info);
        }
        table
    }
}

impl<'a> TypeResolver for &'a TypeTable {
    type Type = &'a TypeInfo;

    fn resolve(&self, descriptor: &TypeDescriptor) -> Resolution<&'a TypeInfo> {
        let table: &'a TypeTable = *self;
        table.types.get(descriptor).into()
    }
}

const NO_PARAMS: [&str; 0] = [];

fn jdk_types() -> Vec<TypeInfo> {
    let string = jvm::STRING;
    vec![
        TypeInfo::new(jvm::OBJECT).constructor(Constructor::default()),
        TypeInfo::new("Ljava/util/UUID;")
            .constructor(Constructor::public(["J", "J"]))
            .method(Method::static_method("fromString", [string]))
            .method(Method::static_method("randomUUID", NO_PARAMS)),
        TypeInfo::new("Ljava/net/URI;")
            .constructor(Constructor::public([string]))
            .method(Method::static_method("create", [string])),
        TypeInfo::new("Ljava/net/URL;").constructor(Constructor::public([string])),
        TypeInfo::new("Ljava/io/File;").constructor(Constructor::public([string])),
        TypeInfo::new("Ljava/util/Locale;")
            .constructor(Constructor::public([string]))
            .constructor(Constructor::public([string, string]))
            .method(Method::static_method("forLanguageTag", [string])),
        TypeInfo::new("Ljava/util/Date;")
            .constructor(Constructor::default())
            .constructor(Constructor::public(["J"]))
            .constructor(Constructor::public([string])),
        TypeInfo::new("Ljava/lang/StringBuilder;")
            .constructor(Constructor::default())
            .constructor(Constructor::public([string])),
        TypeInfo::new("Ljava/lang/Character;")
            .constructor(Constructor::public([jvm::PRIMITIVE_CHAR]))
            .method(Method::static_method("valueOf", [jvm::PRIMITIVE_CHAR])),
        TypeInfo::new("Ljava/time/LocalDate;")
            .method(Method::static_method("parse", ["Ljava/lang/CharSequence;"]))
            .method(Method::static_method("of", ["I", "I", "I"])),
        TypeInfo::new("Ljava/time/Duration;")
            .method(Method::static_method("parse", ["Ljava/lang/CharSequence;"])),
        TypeInfo::new("Ljava/time/DayOfWeek;")
            .enumeration()
            .method(Method::static_method("valueOf", [string])),
        TypeInfo::new("Ljava/util/concurrent/TimeUnit;")
            .enumeration()
            .method(Method::static_method("valueOf", [string])),
        TypeInfo::new("Ljava/util/Currency;")
            .constructor(
                Constructor::public([string, "I", "I"]).with_visibility(Visibility::Private),
            )
            .method(Method::static_method("getInstance", [string])),
        TypeInfo::new("Ljava/util/Optional;")
            .constructor(Constructor::default().with_visibility(Visibility::Private))
            .method(Method::static_method("of", [jvm::OBJECT])),
        TypeInfo::new("Ljava/util/List;").method(Method::static_method("of", NO_PARAMS)),
        TypeInfo::new("Ljava/util/Map;").method(Method::static_method("of", NO_PARAMS)),
        TypeInfo::new("Ljava/util/ArrayList;")
            .constructor(Constructor::default())
            .constructor(Constructor::public(["I"])),
    ]
}
