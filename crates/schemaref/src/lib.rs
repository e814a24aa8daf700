//! # `schemaref` – The umbrella crate
//!
//! Build one JSON Schema document out of several named models and get a
//! helper that produces `$ref` pointers into it. Handy when a web framework
//! or API documentation generator wants a registry of shared schemas plus
//! references to them from individual routes.
//!
//! | Module                | What it provides                                               |
//! |-----------------------|----------------------------------------------------------------|
//! | [`models`]            | `Models` – ordered key → model mapping                         |
//! | [`options`]           | `BuildOptions`, dialect `Target`, `RefStrategy`                |
//! | [`builder`]           | `build_json_schemas`, `JsonSchemasBuilder` with bound defaults |
//! | [`document`]          | `JsonSchemaDocument` – the rendered schema with its `$id`      |
//! | [`reference`]         | `RefFormatter` and `SchemaRef`                                 |
//!
//! ## Quick example
//!
//! ```rust
//! use schemaref::{build_json_schemas, models::Models, options::BuildOptions};
//!
//! #[derive(schemars::JsonSchema)]
//! struct Pet { name: String, age: u8 }
//!
//! let models = Models::new().model::<Pet>("Pet");
//! let built = build_json_schemas(&models, BuildOptions::new().with_id("Zoo"))?;
//!
//! let pet_ref = built.refs.reference("Pet")?;
//! assert_eq!(pet_ref.reference, "Zoo#/properties/Pet");
//! # Ok::<(), schemaref::error::SchemaError>(())
//! ```
//!
//! Models are rendered by [`schemars`](https://docs.rs/schemars), so any type
//! deriving `JsonSchema` can be registered.
#![doc(html_root_url = "https://docs.rs/schemaref/latest")]

pub use schemaref_core::*;
