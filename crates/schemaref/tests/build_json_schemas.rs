use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemaref::{
    JsonSchemasBuilder, build_json_schemas, create_build_json_schemas,
    error::SchemaError,
    models::Models,
    options::{BuildOptions, RefStrategy, Target},
    reference::SchemaRef,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, JsonSchema)]
#[allow(dead_code)]
struct Tag {
    label: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct Article {
    title: String,
    published_at: DateTime<Utc>,
    tags: Vec<Tag>,
    featured: Option<Tag>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[allow(dead_code)]
struct Tree {
    value: i64,
    children: Vec<Tree>,
}

fn models() -> Models {
    Models::new()
        .model::<Article>("Article")
        .model::<Tag>("Tag")
        .model::<Vec<Article>>("ArticleList")
}

#[test]
fn single_document_with_default_id() -> anyhow::Result<()> {
    let built = build_json_schemas(&models(), BuildOptions::new())?;

    assert_eq!(built.schemas.len(), 1);
    assert_eq!(built.schemas[0].id(), "Schema");

    let properties = built.schemas[0]
        .get("properties")
        .and_then(Value::as_object)
        .expect("document has properties");
    let keys: BTreeSet<&str> = properties.keys().map(String::as_str).collect();
    assert_eq!(keys, BTreeSet::from(["Article", "ArticleList", "Tag"]));

    Ok(())
}

#[test]
fn chrono_fields_render_as_date_time() -> anyhow::Result<()> {
    let built = build_json_schemas(&models(), BuildOptions::new())?;
    let article = built.schemas[0].property("Article").expect("Article property");

    assert_eq!(article["properties"]["publishedAt"]["type"], "string");
    assert_eq!(article["properties"]["publishedAt"]["format"], "date-time");
    assert_eq!(built.schemas[0].property("ArticleList").unwrap()["type"], "array");

    Ok(())
}

#[test]
fn refs_embed_into_route_schemas() -> anyhow::Result<()> {
    let built = build_json_schemas(&models(), BuildOptions::new().with_id("Blog"))?;

    let route = json!({
        "body": built.refs.reference("Article")?,
        "response": {
            "200": built.refs.reference("ArticleList")?.with_description("All articles"),
        },
    });

    assert_eq!(
        route,
        json!({
            "body": { "$ref": "Blog#/properties/Article" },
            "response": {
                "200": {
                    "$ref": "Blog#/properties/ArticleList",
                    "description": "All articles",
                },
            },
        })
    );

    Ok(())
}

#[test]
fn unknown_model_fails_fast() {
    let built = build_json_schemas(&models(), BuildOptions::new().with_id("Blog")).unwrap();

    match built.refs.reference("Comment") {
        Err(SchemaError::UnknownModel { key, id }) => {
            assert_eq!(key, "Comment");
            assert_eq!(id, "Blog");
        }
        other => panic!("expected UnknownModel, got {other:?}"),
    }
}

#[test]
fn base_path_from_config_is_ignored() -> anyhow::Result<()> {
    let options: BuildOptions = serde_json::from_value(json!({
        "$id": "Blog",
        "$refStrategy": "root",
        "basePath": ["Somewhere#", "else"],
    }))?;

    let built = build_json_schemas(&models(), options)?;
    let document = &built.schemas[0];

    assert_eq!(
        document.property("Article"),
        Some(&json!({ "$ref": "Blog#/definitions/Article" }))
    );

    let serialized = serde_json::to_string(document)?;
    assert!(!serialized.contains("Somewhere"));
    let references = serialized
        .match_indices("\"$ref\":\"")
        .map(|(i, m)| &serialized[i + m.len()..]);
    for reference in references {
        assert!(reference.starts_with("Blog#/definitions/"), "{reference}");
    }

    Ok(())
}

#[test]
fn recursive_models_under_root_strategy() -> anyhow::Result<()> {
    let built = build_json_schemas(
        &Models::new().model::<Tree>("Tree"),
        BuildOptions::new().with_ref_strategy(RefStrategy::Root),
    )?;
    let document = &built.schemas[0];

    assert_eq!(
        document.property("Tree"),
        Some(&json!({ "$ref": "Schema#/definitions/Tree" }))
    );
    assert_eq!(
        document.get("definitions").unwrap()["Tree"]["properties"]["children"]["items"],
        json!({ "$ref": "Schema#/definitions/Tree" })
    );

    Ok(())
}

#[test]
fn recursive_models_inline_first_level_by_default() -> anyhow::Result<()> {
    let built = build_json_schemas(&Models::new().model::<Tree>("Tree"), BuildOptions::new())?;
    let document = &built.schemas[0];
    let tree = document.property("Tree").expect("Tree property");

    assert_eq!(tree["type"], "object");
    assert_eq!(
        tree["properties"]["children"]["items"],
        json!({ "$ref": "Schema#/definitions/Tree" })
    );
    assert_eq!(
        document.get("definitions").unwrap()["Tree"]["properties"]["value"]["type"],
        "integer"
    );

    Ok(())
}

#[test]
fn raw_json_models_pass_through() -> anyhow::Result<()> {
    let models = Models::new()
        .json("Slug", json!({ "type": "string", "pattern": "^[a-z-]+$" }))?
        .json("Anything", json!(true))?;
    let built = build_json_schemas(&models, BuildOptions::new())?;

    assert_eq!(
        built.schemas[0].property("Slug"),
        Some(&json!({ "type": "string", "pattern": "^[a-z-]+$" }))
    );
    assert_eq!(built.schemas[0].property("Anything"), Some(&json!(true)));

    Ok(())
}

#[test]
fn defaults_loaded_from_yaml() -> anyhow::Result<()> {
    let defaults: BuildOptions = serde_yaml::from_str(
        r#"
"$id": Blog
target: jsonSchema2019-09
additionalProperties: true
"#,
    )?;
    assert_eq!(defaults.target, Some(Target::JsonSchema2019_09));

    let builder = JsonSchemasBuilder::new(defaults);
    let built = builder.build(&models(), BuildOptions::new().with_id("Admin"))?;
    let document = &built.schemas[0];

    assert_eq!(document.id(), "Admin");
    assert_eq!(document.get("additionalProperties"), Some(&json!(true)));
    assert!(
        document
            .get("$schema")
            .and_then(Value::as_str)
            .is_some_and(|meta| meta.contains("2019-09"))
    );
    assert_eq!(
        built.refs.reference("Tag")?,
        SchemaRef::new("Admin#/properties/Tag")
    );

    Ok(())
}

#[test]
fn bound_closure_is_reusable() -> anyhow::Result<()> {
    let build = create_build_json_schemas(BuildOptions::new().with_id("Blog"));

    let first = build(&models(), BuildOptions::new())?;
    let second = build(&Models::new(), BuildOptions::new())?;
    let third = build(&models(), BuildOptions::new().with_meta_schema(false))?;

    assert_eq!(first.schemas, build(&models(), BuildOptions::new())?.schemas);
    assert_eq!(first.refs, third.refs);
    assert_eq!(second.schemas.len(), 1);
    assert_eq!(second.schemas[0].id(), "Blog");
    assert!(third.schemas[0].get("$schema").is_none());

    Ok(())
}
