//! Action inventory
//!
//! Names, descriptions and parameter types as presented to the agent.

use serde::Serialize;
use serde_json::{json, Map, Value};

pub const CREATE_SNIPPET: &str = "create-snippet";
pub const UPDATE_SNIPPET: &str = "update-snippet";
pub const DELETE_SNIPPET: &str = "delete-snippet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamKind {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string[]")]
    StringArray,
}

impl ParamKind {
    fn json_schema(self) -> Value {
        match self {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Number => json!({ "type": "number" }),
            ParamKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionParameter {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub required: bool,
}

impl ActionParameter {
    const fn required(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ActionParameter>,
}

impl ActionSpec {
    /// JSON-Schema object for function-calling APIs
    pub fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.parameters {
            let mut schema = param.kind.json_schema();
            schema["description"] = Value::from(param.description);
            properties.insert(param.name.to_string(), schema);
        }
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

const TITLE: &str = "The title of the code snippet";
const CODE: &str = "The code snippet";
const LANGUAGE: &str = "The language of the code snippet";
const TAGS: &str = "Tags attached to the code snippet";
const ID: &str = "The id of the code snippet";

pub fn create_snippet_spec() -> ActionSpec {
    ActionSpec {
        name: CREATE_SNIPPET,
        description: "Create a new code snippet",
        parameters: vec![
            ActionParameter::required("title", TITLE, ParamKind::String),
            ActionParameter::required("code", CODE, ParamKind::String),
            ActionParameter::optional("language", LANGUAGE, ParamKind::String),
            ActionParameter::optional("tags", TAGS, ParamKind::StringArray),
        ],
    }
}

pub fn update_snippet_spec() -> ActionSpec {
    ActionSpec {
        name: UPDATE_SNIPPET,
        description: "Update a code snippet",
        parameters: vec![
            ActionParameter::required("id", ID, ParamKind::Number),
            ActionParameter::optional("title", TITLE, ParamKind::String),
            ActionParameter::optional("code", CODE, ParamKind::String),
            ActionParameter::optional("language", LANGUAGE, ParamKind::String),
            ActionParameter::optional("tags", TAGS, ParamKind::StringArray),
        ],
    }
}

pub fn delete_snippet_spec() -> ActionSpec {
    ActionSpec {
        name: DELETE_SNIPPET,
        description: "Delete a code snippet",
        parameters: vec![ActionParameter::required("id", ID, ParamKind::Number)],
    }
}

/// Every action the assistant can invoke
pub fn action_specs() -> Vec<ActionSpec> {
    vec![
        create_snippet_spec(),
        update_snippet_spec(),
        delete_snippet_spec(),
    ]
}
