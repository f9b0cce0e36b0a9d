use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;
use thiserror::Error;

use super::{Catalog, CatalogNode, KeyPath};

/// Why a JSON document is not a valid catalog.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected an object at the root, found {found}")]
    RootNotObject { found: &'static str },

    #[error("expected a string or object at `{path}`, found {found}")]
    UnsupportedValue { path: KeyPath, found: &'static str },

    /// Keys are joined with `.` in key paths, so they must be non-empty and
    /// free of dots.
    #[error("invalid key {key:?} under `{parent}`: keys must be non-empty and must not contain '.'")]
    InvalidKey { parent: KeyPath, key: String },
}

impl Catalog {
    pub fn from_json_str(content: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(content)?;
        Catalog::try_from(value)
    }

    /// Pretty-printed JSON with 2-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        Ok(content)
    }
}

impl TryFrom<Value> for Catalog {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => from_object(map, &KeyPath::default()),
            other => Err(ParseError::RootNotObject {
                found: value_kind(&other),
            }),
        }
    }
}

fn from_object(
    map: serde_json::Map<String, Value>,
    prefix: &KeyPath,
) -> Result<Catalog, ParseError> {
    let mut catalog = Catalog::new();
    for (key, value) in map {
        if !is_valid_key(&key) {
            return Err(ParseError::InvalidKey {
                parent: prefix.clone(),
                key,
            });
        }
        let path = prefix.child(key.clone());
        let node = match value {
            Value::String(s) => CatalogNode::Leaf(s),
            Value::Object(child) => CatalogNode::Branch(from_object(child, &path)?),
            other => {
                return Err(ParseError::UnsupportedValue {
                    path,
                    found: value_kind(&other),
                });
            }
        };
        catalog.insert(key, node);
    }
    Ok(catalog)
}

/// A key that survives being joined into and split out of a dotted path.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('.')
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, node) in self.iter() {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl Serialize for CatalogNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CatalogNode::Leaf(value) => serializer.serialize_str(value),
            CatalogNode::Branch(child) => child.serialize(serializer),
        }
    }
}
