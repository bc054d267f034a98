//! Snippet CRUD, listing and derived-set commands

use std::path::Path;

use clap::Args;
use snippy_core::model::DEFAULT_LANGUAGE;
use snippy_core::ops::snippet_ops;
use snippy_core::{
    apply, unique_languages, unique_tags, Command, CommandOutcome, NewSnippet, Snippet,
    SnippetFilter, SnippetId, SnippetPatch, SnippyError,
};
use snippy_store::open_store;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against title or code
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only snippets in this language
    #[arg(long, conflicts_with = "tag")]
    pub language: Option<String>,

    /// Only snippets carrying this tag
    #[arg(long, conflicts_with = "language")]
    pub tag: Option<String>,

    /// Print the matching snippets as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: SnippetId,

    /// Print the snippet as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub code: String,

    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Tag to attach (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: SnippetId,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    /// Replacement tag list (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Remove every tag
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub id: SnippetId,
}

fn print_line(snippet: &Snippet) {
    let tags: Vec<String> = snippet.tags.iter().map(|t| format!("#{}", t)).collect();
    if tags.is_empty() {
        println!("{}  [{}]  {}", snippet.id, snippet.language, snippet.title);
    } else {
        println!(
            "{}  [{}]  {}  {}",
            snippet.id,
            snippet.language,
            snippet.title,
            tags.join(" ")
        );
    }
}

pub fn execute_list(data_dir: &Path, args: ListArgs) -> CommandResult {
    let store = open_store(data_dir);

    let mut filter = SnippetFilter::new().with_search(args.search);
    filter.select_language(args.language);
    filter.select_tag(args.tag);

    let matches = filter.apply(store.list());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No snippets found");
        return Ok(());
    }
    for snippet in matches {
        print_line(snippet);
    }
    Ok(())
}

pub fn execute_show(data_dir: &Path, args: ShowArgs) -> CommandResult {
    let store = open_store(data_dir);

    let snippet = match snippet_ops::read_snippet(&store, args.id) {
        Ok(snippet) => snippet,
        Err(SnippyError::SnippetNotFound { .. }) => {
            println!("Snippet not found");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(snippet)?);
        return Ok(());
    }

    println!("{}", snippet.title);
    println!("  id: {}", snippet.id);
    println!("  language: {}", snippet.language);
    if !snippet.tags.is_empty() {
        println!("  tags: {}", snippet.tags.join(", "));
    }
    println!();
    println!("{}", snippet.code);
    Ok(())
}

pub fn execute_add(data_dir: &Path, args: AddArgs) -> CommandResult {
    let mut store = open_store(data_dir);

    let input = NewSnippet::new(args.title, args.code)
        .with_language(args.language)
        .with_tags(args.tags);

    match apply(&mut store, Command::SnippetCreate(input))? {
        CommandOutcome::Created(snippet) => println!("Created snippet {}", snippet.id),
        other => return Err(format!("unexpected outcome: {:?}", other).into()),
    }
    Ok(())
}

pub fn execute_update(data_dir: &Path, args: UpdateArgs) -> CommandResult {
    let tags = if args.clear_tags {
        Some(Vec::new())
    } else if args.tags.is_empty() {
        None
    } else {
        Some(args.tags)
    };
    let patch = SnippetPatch {
        title: args.title,
        code: args.code,
        language: args.language,
        tags,
    };
    if patch.is_empty() {
        return Err("Nothing to update: pass --title, --code, --language or --tag".into());
    }

    let mut store = open_store(data_dir);
    let outcome = apply(
        &mut store,
        Command::SnippetUpdate {
            snippet_id: args.id,
            patch,
        },
    )?;

    match outcome {
        CommandOutcome::Updated { matched: true, .. } => println!("Updated snippet {}", args.id),
        _ => println!("No snippet with id {}", args.id),
    }
    Ok(())
}

pub fn execute_remove(data_dir: &Path, args: RemoveArgs) -> CommandResult {
    let mut store = open_store(data_dir);

    let outcome = apply(&mut store, Command::SnippetDelete { snippet_id: args.id })?;

    match outcome {
        CommandOutcome::Deleted { matched: true, .. } => println!("Removed snippet {}", args.id),
        _ => println!("No snippet with id {}", args.id),
    }
    Ok(())
}

pub fn execute_languages(data_dir: &Path) -> CommandResult {
    let store = open_store(data_dir);
    for language in unique_languages(store.list()) {
        println!("{}", language);
    }
    Ok(())
}

pub fn execute_tags(data_dir: &Path) -> CommandResult {
    let store = open_store(data_dir);
    for tag in unique_tags(store.list()) {
        println!("{}", tag);
    }
    Ok(())
}
