//! `$ref` pointers into a built document.
//!
//! Every model key becomes a property of the combined document, so the
//! pointer for a key is always `{$id}#/properties/{key}`, with the key
//! inserted verbatim.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// A `{ "$ref": … }` object ready to embed in another schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub reference: String,

    /// Never set by the builder; callers may attach one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<SchemaRef> for serde_json::Value {
    fn from(value: SchemaRef) -> Self {
        let mut object = serde_json::Map::new();
        object.insert("$ref".into(), value.reference.into());
        if let Some(description) = value.description {
            object.insert("description".into(), description.into());
        }
        serde_json::Value::Object(object)
    }
}

/// Builds [`SchemaRef`]s for the models of one document.
///
/// Cheap to clone and free of interior state; calling
/// [`Self::reference`] repeatedly with the same key yields equal results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefFormatter {
    id: String,
    keys: BTreeSet<String>,
}

impl RefFormatter {
    pub(crate) fn new<'a>(id: impl Into<String>, keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            id: id.into(),
            keys: keys.into_iter().map(str::to_owned).collect(),
        }
    }

    /// The `$id` of the document the pointers resolve against.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Pointer to the property that holds model `key`.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::UnknownModel`] – if `key` was not one of the models
    ///   the document was built from.
    pub fn reference(&self, key: &str) -> Result<SchemaRef> {
        if !self.contains(key) {
            return Err(SchemaError::UnknownModel {
                key: key.to_owned(),
                id: self.id.clone(),
            });
        }

        Ok(SchemaRef::new(format!("{}#/properties/{key}", self.id)))
    }
}
