//! The named inputs of a schema document.
//!
//! Each entry pairs a property key with a *model*: anything [`schemars`] can
//! render into a [`Schema`]. Three kinds of models are supported:
//!
//! * a Rust type implementing [`JsonSchema`] ([`Models::model`]),
//! * a pre-built [`Schema`] value ([`Models::schema`]),
//! * a raw JSON value that parses as a schema ([`Models::json`]).
//!
//! ```rust
//! use schemaref_core::models::Models;
//! use schemars::JsonSchema;
//!
//! #[derive(JsonSchema)]
//! struct User { name: String }
//!
//! let models = Models::new()
//!     .model::<User>("User")
//!     .json("Tag", serde_json::json!({ "type": "string" }))
//!     .expect("a string schema is a valid schema");
//!
//! assert_eq!(models.keys().collect::<Vec<_>>(), ["User", "Tag"]);
//! ```

use std::{fmt, sync::Arc};

use schemars::{schema::Schema, JsonSchema, SchemaGenerator};

use crate::error::{Result, SchemaError};

type Render = Arc<dyn Fn(&mut SchemaGenerator) -> Schema + Send + Sync>;

/// Ordered mapping from property key to model.
///
/// Inserting a key that already exists replaces its model but keeps the
/// original position.
#[derive(Clone, Default)]
pub struct Models {
    entries: Vec<(String, Render)>,
}

impl Models {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the schema of the Rust type `T` under `key`.
    pub fn model<T>(self, key: impl Into<String>) -> Self
    where
        T: JsonSchema + ?Sized + 'static,
    {
        self.insert(
            key.into(),
            Arc::new(|generator: &mut SchemaGenerator| generator.subschema_for::<T>()),
        )
    }

    /// Add a pre-built schema under `key`.
    pub fn schema(self, key: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let schema = schema.into();
        self.insert(key.into(), Arc::new(move |_: &mut SchemaGenerator| schema.clone()))
    }

    /// Parse `value` as a schema and add it under `key`.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::InvalidModel`] – if `value` is neither a boolean nor a
    ///   schema object.
    pub fn json(self, key: impl Into<String>, value: serde_json::Value) -> Result<Self> {
        let key = key.into();
        match serde_json::from_value::<Schema>(value) {
            Ok(schema) => Ok(self.schema(key, schema)),
            Err(source) => Err(SchemaError::InvalidModel { key, source }),
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every model with `generator`, in insertion order.
    pub(crate) fn render(&self, generator: &mut SchemaGenerator) -> Vec<(String, Schema)> {
        self.entries
            .iter()
            .map(|(key, render)| (key.clone(), render(&mut *generator)))
            .collect()
    }

    fn insert(mut self, key: String, render: Render) -> Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = render,
            None => self.entries.push((key, render)),
        }
        self
    }
}

impl fmt::Debug for Models {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Models")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
