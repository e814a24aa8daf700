//! Core of the **schemaref** workspace: combine named [`schemars`] models into
//! a single JSON Schema document and point into it with `$ref`s.
//!
//! The crate is a thin layer over `schemars`:
//!
//! 1. [`models::Models`] collects the named inputs.
//! 2. [`build_json_schemas`] wraps them into one object schema, renders it and
//!    attaches the `$id`.
//! 3. [`reference::RefFormatter`] turns a model key into
//!    `{ "$ref": "{$id}#/properties/{key}" }`.
//!
//! [`JsonSchemasBuilder`] (or its closure form [`create_build_json_schemas`])
//! binds default [`options::BuildOptions`] once and merges per-call options
//! over them.
//!
//! Enable the `tracing` feature to get `debug` events for every build.

pub mod builder;
pub mod document;
pub mod error;
pub mod models;
pub mod options;
pub mod reference;

pub use builder::{build_json_schemas, create_build_json_schemas, BuildResult, JsonSchemasBuilder};
