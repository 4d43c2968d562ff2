//! Label definitions and label filters.

use serde::{Deserialize, Serialize};

/// Raw JSON schema text.
///
/// The text is emitted bare, exactly as given. Callers pass an already-encoded
/// GraphQL value, usually a quoted JSON string such as `"{\"type\":\"string\"}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSchema(pub String);

impl JsonSchema {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JsonSchema {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for JsonSchema {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDefinitionInput {
    pub key: String,
    pub schema: Option<JsonSchema>,
}

impl LabelDefinitionInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            schema: None,
        }
    }
}

/// Matches objects by label key, optionally narrowed by a JSONPath query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub key: String,
    pub query: Option<String>,
}

impl LabelFilter {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            query: None,
        }
    }

    pub fn with_query(key: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            query: Some(query.into()),
        }
    }
}
