//! Unified error type exposed by **`schemaref-core`**.
//!
//! The builder is a thin layer over [`schemars`], so most variants simply
//! forward what went wrong while rendering or serialising a schema. The only
//! check the crate performs on its own is the model-key lookup in
//! [`RefFormatter::reference`](crate::reference::RefFormatter::reference).

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// A `$ref` was requested for a key that is not part of the models the
    /// document was built from.
    #[error("no model `{key}` in schema `{id}`")]
    UnknownModel { key: String, id: String },

    /// A raw JSON value handed in as a model could not be read as a schema.
    #[error("model `{key}` is not a valid schema: {source}")]
    InvalidModel {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure while serialising the rendered schema into JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
