//! Options accepted by the builder.
//!
//! Every field of [`BuildOptions`] is optional so a bound set of defaults can
//! be layered under per-call options with [`BuildOptions::merge`]. The serde
//! representation uses the camelCase option names common to JSON Schema
//! tooling, so options can be loaded straight from a JSON or YAML file:
//!
//! ```rust
//! use schemaref_core::options::{BuildOptions, Target};
//!
//! let options: BuildOptions = serde_json::from_value(serde_json::json!({
//!     "$id": "Api",
//!     "target": "openApi3",
//! }))
//! .unwrap();
//!
//! assert_eq!(options.id.as_deref(), Some("Api"));
//! assert_eq!(options.target, Some(Target::OpenApi3));
//! ```
//!
//! There is deliberately no `basePath` field. The builder always anchors
//! generated paths at `{$id}#`; a `basePath` entry in a config file is
//! accepted and ignored.

use schemars::r#gen::SchemaSettings;
use serde::{Deserialize, Serialize};

/// Identifier used when no `$id` is configured.
pub const DEFAULT_ID: &str = "Schema";

/// Section name for shared definitions when no `definitionPath` is configured.
pub const DEFAULT_DEFINITION_PATH: &str = "definitions";

/// JSON Schema dialect to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    #[default]
    #[serde(rename = "jsonSchema7")]
    JsonSchema7,
    #[serde(rename = "jsonSchema2019-09")]
    JsonSchema2019_09,
    #[serde(rename = "openApi3")]
    OpenApi3,
}

impl Target {
    /// The [`schemars`] settings preset for this dialect.
    pub fn settings(self) -> SchemaSettings {
        match self {
            Target::JsonSchema7 => SchemaSettings::draft07(),
            Target::JsonSchema2019_09 => SchemaSettings::draft2019_09(),
            Target::OpenApi3 => SchemaSettings::openapi3(),
        }
    }
}

/// How repeated named types are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefStrategy {
    /// Inline every subschema.
    ///
    /// A recursive type is inlined once; its self-references point into the
    /// definitions section.
    #[default]
    None,
    /// Put named types in the definitions section and point at them.
    Root,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Document identifier, also the anchor of every `$ref` (default `"Schema"`).
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    #[serde(rename = "$refStrategy", default, skip_serializing_if = "Option::is_none")]
    pub ref_strategy: Option<RefStrategy>,

    /// Key of the definitions section (default `"definitions"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_path: Option<String>,

    /// Emit the dialect's `$schema` keyword (default `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_schema: Option<bool>,

    /// Admit properties beyond the model keys (default `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_ref_strategy(mut self, ref_strategy: RefStrategy) -> Self {
        self.ref_strategy = Some(ref_strategy);
        self
    }

    pub fn with_definition_path(mut self, definition_path: impl Into<String>) -> Self {
        self.definition_path = Some(definition_path.into());
        self
    }

    pub fn with_meta_schema(mut self, meta_schema: bool) -> Self {
        self.meta_schema = Some(meta_schema);
        self
    }

    pub fn with_additional_properties(mut self, additional_properties: bool) -> Self {
        self.additional_properties = Some(additional_properties);
        self
    }

    /// Layer `overrides` on top of `self`, field by field.
    ///
    /// A field set in `overrides` wins; an unset field keeps the value from
    /// `self`.
    ///
    /// ```rust
    /// use schemaref_core::options::{BuildOptions, Target};
    ///
    /// let defaults = BuildOptions::new().with_id("X").with_target(Target::OpenApi3);
    /// let merged = defaults.merge(BuildOptions::new().with_id("Y"));
    ///
    /// assert_eq!(merged.id.as_deref(), Some("Y"));
    /// assert_eq!(merged.target, Some(Target::OpenApi3));
    /// ```
    pub fn merge(self, overrides: BuildOptions) -> BuildOptions {
        BuildOptions {
            id: overrides.id.or(self.id),
            target: overrides.target.or(self.target),
            ref_strategy: overrides.ref_strategy.or(self.ref_strategy),
            definition_path: overrides.definition_path.or(self.definition_path),
            meta_schema: overrides.meta_schema.or(self.meta_schema),
            additional_properties: overrides.additional_properties.or(self.additional_properties),
        }
    }

    /// Fill every unset field with its default.
    pub(crate) fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            id: self.id.unwrap_or_else(|| DEFAULT_ID.to_owned()),
            target: self.target.unwrap_or_default(),
            ref_strategy: self.ref_strategy.unwrap_or_default(),
            definition_path: self
                .definition_path
                .unwrap_or_else(|| DEFAULT_DEFINITION_PATH.to_owned()),
            meta_schema: self.meta_schema.unwrap_or(true),
            additional_properties: self.additional_properties.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedOptions {
    pub id: String,
    pub target: Target,
    pub ref_strategy: RefStrategy,
    pub definition_path: String,
    pub meta_schema: bool,
    pub additional_properties: bool,
}

impl ResolvedOptions {
    /// Root every generated path lives under.
    pub fn base_path(&self) -> String {
        format!("{}#", self.id)
    }

    /// Generator settings for these options, with the base path forced to
    /// [`Self::base_path`].
    pub fn settings(&self) -> SchemaSettings {
        let mut settings = self.target.settings();
        settings.inline_subschemas = self.ref_strategy == RefStrategy::None;
        settings.definitions_path = format!("{}/{}/", self.base_path(), self.definition_path);
        if !self.meta_schema {
            settings.meta_schema = None;
        }
        settings
    }
}
