use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{Snippet, SnippetId, SnippetPatch};
use crate::ops::id_gen::{IdGenerator, SequentialIdGenerator};
use crate::ops::slot::{MemorySlot, SnippetSlot, STORAGE_KEY};

/// Layout version written next to the collection
pub const STORAGE_VERSION: u32 = 0;

/// Handle returned by `subscribe`, used to unsubscribe on teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[Snippet]) + Send>;

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    state: SnippetsStateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct SnippetsStateRef<'a> {
    snippets: &'a [Snippet],
}

#[derive(Deserialize)]
struct SnippetsState {
    snippets: Vec<Snippet>,
}

/// Accepted on-disk layouts: the versioned envelope, or a bare `{snippets}`
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLayout {
    Envelope {
        state: SnippetsState,
        #[serde(default)]
        #[allow(dead_code)]
        version: u32,
    },
    Bare(SnippetsState),
}

impl StoredLayout {
    fn into_snippets(self) -> Vec<Snippet> {
        match self {
            StoredLayout::Envelope { state, .. } => state.snippets,
            StoredLayout::Bare(state) => state.snippets,
        }
    }
}

/// Authoritative in-memory snippet collection with durable persistence
///
/// Owned by whoever drives the application and passed by `&mut` to the
/// code that mutates it. Insertion order is preserved. Every mutation
/// rewrites the whole collection into the slot, then notifies observers.
///
/// The store performs no validation; `snippet_ops` validates user input
/// before calling in.
pub struct SnippetStore {
    snippets: Vec<Snippet>,
    slot: Box<dyn SnippetSlot>,
    id_gen: Box<dyn IdGenerator>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for SnippetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetStore")
            .field("snippets", &self.snippets)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SnippetStore {
    /// Rehydrate a store from `slot`
    ///
    /// A missing, unreadable or corrupt payload yields an empty collection;
    /// opening never fails.
    pub fn open(slot: Box<dyn SnippetSlot>, mut id_gen: Box<dyn IdGenerator>) -> Self {
        let snippets = match slot.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<StoredLayout>(&raw) {
                Ok(layout) => layout.into_snippets(),
                Err(err) => {
                    tracing::warn!(
                        op = "open_store",
                        error = %err,
                        "stored snippets are corrupt, starting empty"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    op = "open_store",
                    error = %err,
                    "snippet slot unreadable, starting empty"
                );
                Vec::new()
            }
        };

        for snippet in &snippets {
            id_gen.observe(snippet.id);
        }

        tracing::debug!(op = "open_store", snippet_count = snippets.len());

        Self {
            snippets,
            slot,
            id_gen,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Empty store over a fresh `MemorySlot` with sequential ids
    pub fn in_memory() -> Self {
        Self::open(
            Box::new(MemorySlot::new()),
            Box::new(SequentialIdGenerator::new()),
        )
    }

    /// Append a new snippet with a freshly generated id
    ///
    /// # Errors
    ///
    /// Returns a storage error if the flush fails. The snippet stays in
    /// memory and observers have already been notified.
    pub fn create(
        &mut self,
        title: String,
        code: String,
        language: String,
        tags: Vec<String>,
    ) -> Result<Snippet> {
        let snippet = Snippet {
            id: self.id_gen.next_id(),
            title,
            code,
            language,
            tags,
        };
        self.snippets.push(snippet.clone());
        self.commit()?;
        Ok(snippet)
    }

    /// Merge `patch` into the snippet with `id`; silent no-op if absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if the flush fails.
    pub fn update(&mut self, id: SnippetId, patch: SnippetPatch) -> Result<()> {
        if let Some(snippet) = self.snippets.iter_mut().find(|s| s.id == id) {
            patch.apply_to(snippet);
        }
        self.commit()
    }

    /// Excise the snippet with `id`; silent no-op if absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if the flush fails.
    pub fn remove(&mut self, id: SnippetId) -> Result<()> {
        self.snippets.retain(|s| s.id != id);
        self.commit()
    }

    /// Current collection in insertion order
    pub fn list(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn find_by_id(&self, id: SnippetId) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// First snippet with identical title, code and language
    pub fn find_duplicate(&self, title: &str, code: &str, language: &str) -> Option<&Snippet> {
        self.snippets
            .iter()
            .find(|s| s.same_content(title, code, language))
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Register an observer called with the collection after every mutation
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[Snippet]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Serialize the full collection into the slot
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error.
    pub fn flush(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&PersistedStateRef {
            state: SnippetsStateRef {
                snippets: &self.snippets,
            },
            version: STORAGE_VERSION,
        })?;
        self.slot.write(STORAGE_KEY, &payload)
    }

    fn commit(&mut self) -> Result<()> {
        let flushed = self.flush();
        self.notify();
        flushed
    }

    fn notify(&mut self) {
        let snippets = &self.snippets;
        for (_, observer) in self.observers.iter_mut() {
            observer(snippets);
        }
    }
}
