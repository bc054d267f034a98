//! Assistant actions and readable context

use std::path::Path;

use clap::{Args, Subcommand, ValueEnum};
use serde_json::{json, Value};
use snippy_assistant::{dispatch_on, ChatSurface, ReadableContext};
use snippy_core::SnippetId;
use snippy_store::open_store;

use super::CommandResult;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SurfaceArg {
    /// Snippet list page
    List,
    /// Single snippet page
    Detail,
}

impl From<SurfaceArg> for ChatSurface {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::List => ChatSurface::List,
            SurfaceArg::Detail => ChatSurface::Detail,
        }
    }
}

#[derive(Debug, Args)]
pub struct AssistArgs {
    #[command(subcommand)]
    pub command: AssistCommand,
}

#[derive(Debug, Subcommand)]
pub enum AssistCommand {
    /// Print the action inventory and instructions as JSON
    Actions {
        #[arg(long, value_enum, default_value = "list")]
        surface: SurfaceArg,
    },
    /// Invoke an action with JSON arguments
    Run {
        name: String,
        args: String,

        #[arg(long, value_enum, default_value = "list")]
        surface: SurfaceArg,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the readable context for the collection or one snippet
    Context {
        #[arg(long)]
        id: Option<SnippetId>,
    },
}

pub fn execute(data_dir: &Path, args: AssistArgs) -> CommandResult {
    match args.command {
        AssistCommand::Actions { surface } => execute_actions(surface.into()),
        AssistCommand::Run {
            name,
            args,
            surface,
            json,
        } => execute_run(data_dir, surface.into(), &name, &args, json),
        AssistCommand::Context { id } => execute_context(data_dir, id),
    }
}

fn execute_actions(surface: ChatSurface) -> CommandResult {
    let actions: Vec<Value> = surface
        .action_specs()
        .iter()
        .map(|spec| {
            json!({
                "name": spec.name,
                "description": spec.description,
                "parameters": spec.parameters_schema(),
            })
        })
        .collect();

    let listing = json!({
        "instructions": surface.instructions(),
        "actions": actions,
    });
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn execute_run(
    data_dir: &Path,
    surface: ChatSurface,
    name: &str,
    raw_args: &str,
    as_json: bool,
) -> CommandResult {
    let args: Value =
        serde_json::from_str(raw_args).map_err(|e| format!("arguments are not JSON: {}", e))?;

    let mut store = open_store(data_dir);
    let outcome = dispatch_on(surface, &mut store, name, args)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.summary());
    }
    Ok(())
}

fn execute_context(data_dir: &Path, id: Option<SnippetId>) -> CommandResult {
    let store = open_store(data_dir);
    let context = match id {
        Some(id) => ReadableContext::snippet(&store, id)?,
        None => ReadableContext::collection(&store)?,
    };
    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
