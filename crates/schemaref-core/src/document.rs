//! The JSON Schema document produced by the builder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A rendered JSON Schema object carrying a top-level `$id`.
///
/// Apart from `$id` no shape is enforced; the remaining keys are whatever
/// [`schemars`] emitted for the combined models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSchemaDocument(Map<String, Value>);

impl JsonSchemaDocument {
    /// Start from `{ "$id": id }` and overlay every entry of `rendered`.
    pub(crate) fn new(id: &str, rendered: Map<String, Value>) -> Self {
        let mut document = Map::new();
        document.insert("$id".to_owned(), Value::String(id.to_owned()));
        document.extend(rendered);
        Self(document)
    }

    /// The document's `$id`.
    pub fn id(&self) -> &str {
        self.0.get("$id").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Schema of the property generated for model `key`.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.0.get("properties")?.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<JsonSchemaDocument> for Value {
    fn from(value: JsonSchemaDocument) -> Self {
        value.into_value()
    }
}
