//! Command dispatch
//!
//! `apply()` is the single entry point that turns a `Command` into calls on
//! the validated snippet operations.
//!
//! ## Example
//!
//! ```
//! use snippy_core::{apply, Command, CommandOutcome, NewSnippet, SnippetStore};
//!
//! let mut store = SnippetStore::in_memory();
//! let outcome = apply(&mut store, Command::SnippetCreate(NewSnippet::new("Hi", "echo hi"))).unwrap();
//! assert!(matches!(outcome, CommandOutcome::Created(_)));
//! assert_eq!(store.len(), 1);
//! ```

use crate::commands::{Command, CommandOutcome};
use crate::errors::Result;
use crate::ops::{snippet_ops, SnippetStore};

/// Apply a command to the store
///
/// Validation failures leave the store untouched. Update and delete report
/// whether the id matched; an unmatched id is not an error.
///
/// # Errors
///
/// Returns the validation or storage error raised by the underlying
/// operation.
pub fn apply(store: &mut SnippetStore, cmd: Command) -> Result<CommandOutcome> {
    match cmd {
        Command::SnippetCreate(input) => {
            let snippet = snippet_ops::create_snippet(store, input)?;
            Ok(CommandOutcome::Created(snippet))
        }

        Command::SnippetUpdate { snippet_id, patch } => {
            let matched = store.find_by_id(snippet_id).is_some();
            snippet_ops::update_snippet(store, snippet_id, patch)?;
            Ok(CommandOutcome::Updated {
                snippet_id,
                matched,
            })
        }

        Command::SnippetDelete { snippet_id } => {
            let matched = store.find_by_id(snippet_id).is_some();
            snippet_ops::remove_snippet(store, snippet_id)?;
            Ok(CommandOutcome::Deleted {
                snippet_id,
                matched,
            })
        }
    }
}
