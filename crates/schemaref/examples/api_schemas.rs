use chrono::{DateTime, Utc};
use schemaref::{
    JsonSchemasBuilder,
    models::Models,
    options::{BuildOptions, Target},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct CreateTodo {
    /// What needs doing.
    title: String,
    due_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct Todo {
    id: u64,
    title: String,
    done: bool,
    created_at: DateTime<Utc>,
}

/// ---------------------------------------------------------------------------
/// Example  –  shared schemas for an HTTP API
///
/// Registers request / response models once, prints the combined document
/// and a route schema that points into it.
///
/// ```bash
/// cargo run -p schemaref --example api_schemas
/// ```
/// ---------------------------------------------------------------------------
fn main() -> anyhow::Result<()> {
    let builder = JsonSchemasBuilder::new(BuildOptions::new().with_target(Target::JsonSchema7));

    let models = Models::new()
        .model::<CreateTodo>("createTodoBody")
        .model::<Todo>("todo")
        .model::<Vec<Todo>>("todoList");

    let built = builder.build(&models, BuildOptions::new().with_id("TodoApi"))?;

    for schema in &built.schemas {
        println!("{}", serde_json::to_string_pretty(schema)?);
    }

    let route = serde_json::json!({
        "method": "POST",
        "url": "/todos",
        "schema": {
            "body": built.refs.reference("createTodoBody")?,
            "response": { "201": built.refs.reference("todo")? },
        },
    });
    println!("{}", serde_json::to_string_pretty(&route)?);

    Ok(())
}
