//! Command inventory
//!
//! Every mutation the CLI or the assistant can request, processed by
//! `apply()`.

use crate::model::{NewSnippet, Snippet, SnippetId, SnippetPatch};

/// Mutation request against the snippet store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new snippet (validated)
    SnippetCreate(NewSnippet),

    /// Merge fields into an existing snippet
    SnippetUpdate {
        snippet_id: SnippetId,
        patch: SnippetPatch,
    },

    /// Remove a snippet
    SnippetDelete { snippet_id: SnippetId },
}

impl Command {
    /// Operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::SnippetCreate(_) => "snippet_create",
            Command::SnippetUpdate { .. } => "snippet_update",
            Command::SnippetDelete { .. } => "snippet_delete",
        }
    }
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(Snippet),
    /// `matched` is false when the id was absent (no-op)
    Updated { snippet_id: SnippetId, matched: bool },
    Deleted { snippet_id: SnippetId, matched: bool },
}
