//! Schema primitive kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The primitive `"type"` keyword a schema document can carry.
///
/// Serializes as the lowercase keyword (`"string"`, `"integer"`, ...), which is
/// what Swagger/OpenAPI and JSON Schema expect verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Boolean,
    Integer,
    Number,
    Object,
}

impl SchemaKind {
    /// All kinds, in declaration order.
    pub const ALL: [SchemaKind; 5] = [
        SchemaKind::String,
        SchemaKind::Boolean,
        SchemaKind::Integer,
        SchemaKind::Number,
        SchemaKind::Object,
    ];

    /// The schema keyword for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Integer => "integer",
            SchemaKind::Number => "number",
            SchemaKind::Object => "object",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a keyword is not one of the known schema kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown schema kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for SchemaKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for kind in SchemaKind::ALL {
            assert_eq!(kind.as_str().parse::<SchemaKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "String".parse::<SchemaKind>(),
            Err(UnknownKind("String".to_string()))
        );
        assert!("array".parse::<SchemaKind>().is_err());
    }

    #[test]
    fn test_serializes_as_keyword() {
        let json = serde_json::to_string(&SchemaKind::Integer).unwrap();
        assert_eq!(json, "\"integer\"");
        assert_eq!(SchemaKind::Object.to_string(), "object");
    }
}
