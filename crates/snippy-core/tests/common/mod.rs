use snippy_core::{MemorySlot, SequentialIdGenerator, Snippet, SnippetStore};

/// Create a new empty in-memory store
#[allow(dead_code)]
pub fn new_store() -> SnippetStore {
    SnippetStore::in_memory()
}

/// Open a store over `slot`, as the application does at startup
#[allow(dead_code)]
pub fn open_store(slot: &MemorySlot) -> SnippetStore {
    SnippetStore::open(
        Box::new(slot.clone()),
        Box::new(SequentialIdGenerator::new()),
    )
}

/// Create a snippet directly through the store (no validation)
#[allow(dead_code)]
pub fn create_test_snippet(
    store: &mut SnippetStore,
    title: &str,
    language: &str,
    tags: &[&str],
) -> Snippet {
    store
        .create(
            title.to_string(),
            format!("// {}", title),
            language.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
        .unwrap()
}
