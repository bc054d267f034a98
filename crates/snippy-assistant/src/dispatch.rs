//! Action routing
//!
//! Arguments arrive as loosely-typed JSON from the agent. They are decoded
//! into an `AssistantAction`, turned into a core `Command` and applied
//! through the same validated path as every other caller.

use std::time::Instant;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use snippy_core::model::DEFAULT_LANGUAGE;
use snippy_core::{
    apply, log_op_end, log_op_error, log_op_start, Command, CommandOutcome, NewSnippet, Result,
    Snippet, SnippetId, SnippetPatch, SnippetStore, SnippyError,
};

use crate::actions::{CREATE_SNIPPET, DELETE_SNIPPET, UPDATE_SNIPPET};
use crate::surface::ChatSurface;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Agents send ids as `17`, `17.0` or `"17"`
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<SnippetId, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| D::Error::custom(format!("id {} is not an integer", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("id {:?} is not an integer", s))),
        other => Err(D::Error::custom(format!("id must be a number, got {}", other))),
    }
}

#[derive(Debug, Deserialize)]
struct CreateArgs {
    title: String,
    code: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateArgs {
    #[serde(deserialize_with = "lenient_id")]
    id: SnippetId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct DeleteArgs {
    #[serde(deserialize_with = "lenient_id")]
    id: SnippetId,
}

/// Decoded action invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantAction {
    Create(NewSnippet),
    Update { id: SnippetId, patch: SnippetPatch },
    Delete { id: SnippetId },
}

impl AssistantAction {
    /// Decode `args` for the action called `name`
    ///
    /// # Errors
    ///
    /// * `UnknownAction` - `name` is not in the inventory
    /// * `InvalidArguments` - `args` do not fit the action's parameters
    pub fn parse(name: &str, args: Value) -> Result<Self> {
        let invalid = |err: serde_json::Error| SnippyError::InvalidArguments {
            action: name.to_string(),
            reason: err.to_string(),
        };

        match name {
            CREATE_SNIPPET => {
                let args: CreateArgs = serde_json::from_value(args).map_err(invalid)?;
                let language = args
                    .language
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
                Ok(AssistantAction::Create(
                    NewSnippet::new(args.title, args.code)
                        .with_language(language)
                        .with_tags(args.tags),
                ))
            }
            UPDATE_SNIPPET => {
                let args: UpdateArgs = serde_json::from_value(args).map_err(invalid)?;
                Ok(AssistantAction::Update {
                    id: args.id,
                    patch: SnippetPatch {
                        title: args.title,
                        code: args.code,
                        language: args.language,
                        tags: args.tags,
                    },
                })
            }
            DELETE_SNIPPET => {
                let args: DeleteArgs = serde_json::from_value(args).map_err(invalid)?;
                Ok(AssistantAction::Delete { id: args.id })
            }
            other => Err(SnippyError::UnknownAction {
                name: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AssistantAction::Create(_) => CREATE_SNIPPET,
            AssistantAction::Update { .. } => UPDATE_SNIPPET,
            AssistantAction::Delete { .. } => DELETE_SNIPPET,
        }
    }

    pub fn into_command(self) -> Command {
        match self {
            AssistantAction::Create(input) => Command::SnippetCreate(input),
            AssistantAction::Update { id, patch } => Command::SnippetUpdate {
                snippet_id: id,
                patch,
            },
            AssistantAction::Delete { id } => Command::SnippetDelete { snippet_id: id },
        }
    }
}

/// Result reported back to the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Created { snippet: Snippet },
    /// An entry with the same title, code and language already exists
    SkippedDuplicate { existing_id: SnippetId },
    Updated { snippet_id: SnippetId, matched: bool },
    Deleted { snippet_id: SnippetId, matched: bool },
}

impl ActionOutcome {
    /// One-line confirmation suitable for a chat reply
    pub fn summary(&self) -> String {
        match self {
            ActionOutcome::Created { snippet } => {
                format!("Created snippet {} ({})", snippet.id, snippet.title)
            }
            ActionOutcome::SkippedDuplicate { existing_id } => {
                format!("Snippet already exists as {}", existing_id)
            }
            ActionOutcome::Updated {
                snippet_id,
                matched: true,
            } => format!("Updated snippet {}", snippet_id),
            ActionOutcome::Deleted {
                snippet_id,
                matched: true,
            } => format!("Deleted snippet {}", snippet_id),
            ActionOutcome::Updated { snippet_id, .. } | ActionOutcome::Deleted { snippet_id, .. } => {
                format!("No snippet with id {}", snippet_id)
            }
        }
    }
}

impl From<CommandOutcome> for ActionOutcome {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Created(snippet) => ActionOutcome::Created { snippet },
            CommandOutcome::Updated {
                snippet_id,
                matched,
            } => ActionOutcome::Updated {
                snippet_id,
                matched,
            },
            CommandOutcome::Deleted {
                snippet_id,
                matched,
            } => ActionOutcome::Deleted {
                snippet_id,
                matched,
            },
        }
    }
}

fn run(store: &mut SnippetStore, action: AssistantAction) -> Result<ActionOutcome> {
    if let AssistantAction::Create(input) = &action {
        if let Some(existing) = store.find_duplicate(&input.title, &input.code, &input.language) {
            return Ok(ActionOutcome::SkippedDuplicate {
                existing_id: existing.id,
            });
        }
    }
    apply(store, action.into_command()).map(ActionOutcome::from)
}

/// Invoke the action called `name` with JSON `args`
///
/// Creating an exact duplicate of an existing entry is skipped rather
/// than applied.
///
/// # Errors
///
/// * `UnknownAction` / `InvalidArguments` - the invocation does not decode
/// * validation and storage errors from the store
pub fn dispatch(store: &mut SnippetStore, name: &str, args: Value) -> Result<ActionOutcome> {
    let start = Instant::now();
    log_op_start!("assistant_dispatch", action = name);

    let result = AssistantAction::parse(name, args).and_then(|action| run(store, action));

    match &result {
        Ok(outcome) => {
            log_op_end!(
                "assistant_dispatch",
                duration_ms = elapsed_ms(start),
                action = name,
                outcome = ?outcome
            );
        }
        Err(err) => {
            log_op_error!(
                "assistant_dispatch",
                err.clone(),
                duration_ms = elapsed_ms(start),
                action = name
            );
        }
    }
    result
}

/// `dispatch` restricted to the actions offered on `surface`
///
/// # Errors
///
/// `UnknownAction` if the surface does not offer `name`, otherwise as
/// `dispatch`.
pub fn dispatch_on(
    surface: ChatSurface,
    store: &mut SnippetStore,
    name: &str,
    args: Value,
) -> Result<ActionOutcome> {
    if !surface.offers(name) {
        return Err(SnippyError::UnknownAction {
            name: name.to_string(),
        });
    }
    dispatch(store, name, args)
}
