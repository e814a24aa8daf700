//! Combine named models into one JSON Schema document.
//!
//! [`build_json_schemas`] wraps the models into a single object schema (one
//! required property per model key), renders it with [`schemars`], attaches
//! the `$id` and hands back a [`RefFormatter`] for pointers into the result.
//!
//! ```rust
//! use schemaref_core::{build_json_schemas, models::Models, options::BuildOptions};
//! use schemars::JsonSchema;
//!
//! #[derive(JsonSchema)]
//! struct User { name: String }
//!
//! let models = Models::new().model::<User>("User");
//! let result = build_json_schemas(&models, BuildOptions::new().with_id("Api")).unwrap();
//!
//! assert_eq!(result.schemas.len(), 1);
//! assert_eq!(result.schemas[0].id(), "Api");
//! assert_eq!(result.refs.reference("User").unwrap().reference, "Api#/properties/User");
//! ```
//!
//! [`JsonSchemasBuilder`] binds a set of default options once, for callers
//! that build many documents with the same dialect or `$id` scheme.

use schemars::{
    schema::{InstanceType, ObjectValidation, RootSchema, Schema, SchemaObject},
    SchemaGenerator,
};
use serde_json::{Map, Value};

use crate::{
    document::JsonSchemaDocument,
    error::Result,
    models::Models,
    options::BuildOptions,
    reference::{RefFormatter, SchemaRef},
};

/// Output of a build: exactly one document and its pointer helper.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Always holds a single document; kept as a list so more can be added
    /// without breaking callers.
    pub schemas: Vec<JsonSchemaDocument>,
    pub refs: RefFormatter,
}

impl BuildResult {
    /// Shorthand for `self.refs.reference(key)`.
    pub fn reference(&self, key: &str) -> Result<SchemaRef> {
        self.refs.reference(key)
    }
}

/// Build the combined document for `models`.
///
/// Unset options fall back to: `$id` `"Schema"`, dialect draft-07, every
/// subschema inlined, `$schema` emitted, no additional properties. Generated
/// definition references are always anchored at `{$id}#`.
///
/// # Errors
///
/// * [`SchemaError::Serialization`](crate::error::SchemaError::Serialization) – the rendered schema could not be
///   converted into a JSON object.
pub fn build_json_schemas(models: &Models, options: BuildOptions) -> Result<BuildResult> {
    let options = options.resolve();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        id = %options.id,
        models = models.len(),
        target = ?options.target,
        ref_strategy = ?options.ref_strategy,
        "building json schema document"
    );

    let mut generator = SchemaGenerator::new(options.settings());
    let properties = models.render(&mut generator);

    let mut root = RootSchema::default();
    root.schema = combine(properties, options.additional_properties);
    root.meta_schema = generator.settings().meta_schema.clone();
    root.definitions = generator.take_definitions();

    for visitor in generator.visitors_mut() {
        visitor.visit_root_schema(&mut root);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(definitions = root.definitions.len(), "rendered models");

    let rendered = into_object(root, &options.definition_path)?;

    Ok(BuildResult {
        schemas: vec![JsonSchemaDocument::new(&options.id, rendered)],
        refs: RefFormatter::new(options.id.clone(), models.keys()),
    })
}

/// One object schema with a required property per model.
fn combine(properties: Vec<(String, Schema)>, additional_properties: bool) -> SchemaObject {
    let mut object = ObjectValidation::default();
    for (key, schema) in properties {
        object.required.insert(key.clone());
        object.properties.insert(key, schema);
    }
    object.additional_properties = Some(Box::new(Schema::Bool(additional_properties)));

    SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        object: Some(Box::new(object)),
        ..Default::default()
    }
}

/// Serialise `root` and move its definitions under `definition_path`.
fn into_object(root: RootSchema, definition_path: &str) -> Result<Map<String, Value>> {
    let mut rendered: Map<String, Value> = serde_json::from_value(serde_json::to_value(&root)?)?;

    if let Some(definitions) = rendered
        .remove("definitions")
        .or_else(|| rendered.remove("$defs"))
    {
        rendered.insert(definition_path.to_owned(), definitions);
    }

    Ok(rendered)
}

/// Builder with a bound set of default options.
///
/// Per-call options are layered over the defaults with
/// [`BuildOptions::merge`], so only the fields a call sets replace the
/// defaults.
///
/// ```rust
/// use schemaref_core::{JsonSchemasBuilder, models::Models, options::BuildOptions};
///
/// let builder = JsonSchemasBuilder::new(BuildOptions::new().with_id("Api"));
/// let models = Models::new().model::<String>("name");
///
/// let api = builder.build(&models, BuildOptions::new()).unwrap();
/// let admin = builder.build(&models, BuildOptions::new().with_id("Admin")).unwrap();
///
/// assert_eq!(api.schemas[0].id(), "Api");
/// assert_eq!(admin.schemas[0].id(), "Admin");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonSchemasBuilder {
    defaults: BuildOptions,
}

impl JsonSchemasBuilder {
    pub fn new(defaults: BuildOptions) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &BuildOptions {
        &self.defaults
    }

    /// Build with `options` layered over the bound defaults.
    pub fn build(&self, models: &Models, options: BuildOptions) -> Result<BuildResult> {
        build_json_schemas(models, self.defaults.clone().merge(options))
    }
}

/// Closure form of [`JsonSchemasBuilder`].
pub fn create_build_json_schemas(
    defaults: BuildOptions,
) -> impl Fn(&Models, BuildOptions) -> Result<BuildResult> + Clone + Send + Sync {
    let builder = JsonSchemasBuilder::new(defaults);
    move |models, options| builder.build(models, options)
}
