use snippy_core::SnippetStore;

/// Store pre-seeded the way the list page usually looks
#[allow(dead_code)]
pub fn seeded_store() -> SnippetStore {
    let mut store = SnippetStore::in_memory();
    store
        .create(
            "Debounce".into(),
            "function debounce(fn, ms) {}".into(),
            "javascript".into(),
            vec!["utils".into()],
        )
        .unwrap();
    store
        .create(
            "Quick sort".into(),
            "def qs(xs): ...".into(),
            "python".into(),
            vec!["algo".into()],
        )
        .unwrap();
    store
}
