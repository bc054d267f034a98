//! Snippy Core - snippet model, store and query semantics
//!
//! - `Snippet` model with partial-update patches
//! - `SnippetStore`: ordered in-memory collection, persisted to an injected
//!   slot on every mutation, with observer subscriptions
//! - Injectable id generation (clock or sequential)
//! - Search/filter predicates and derived language/tag sets
//! - `Command` + `apply()` boundary used by the CLI and the assistant
//! - Error and logging facilities shared by the other crates

pub mod apply;
pub mod commands;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use snippy_core_types;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{Command, CommandOutcome};
pub use errors::{ExError, ExErrorKind, Result, SnippyError};
pub use filter::{unique_languages, unique_tags, SnippetFilter};
pub use model::{NewSnippet, Snippet, SnippetId, SnippetPatch};
pub use ops::{
    ClockIdGenerator, IdGenerator, MemorySlot, SequentialIdGenerator, SnippetSlot, SnippetStore,
    SubscriptionId,
};
