mod common;

use common::{create_test_snippet, new_store, open_store};
use snippy_core::ops::STORAGE_KEY;
use snippy_core::{MemorySlot, SnippetPatch};

// ===== CREATE =====

#[test]
fn test_every_created_snippet_is_retrievable() {
    let mut store = new_store();
    let created: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|title| create_test_snippet(&mut store, title, "python", &[]))
        .collect();

    assert_eq!(store.len(), 3);
    for snippet in &created {
        assert_eq!(store.find_by_id(snippet.id), Some(snippet));
    }
}

#[test]
fn test_create_keeps_duplicate_tags() {
    let mut store = new_store();
    let snippet = create_test_snippet(&mut store, "Tags", "css", &["ui", "ui"]);
    assert_eq!(store.find_by_id(snippet.id).unwrap().tags, vec!["ui", "ui"]);
}

// ===== UPDATE =====

#[test]
fn test_update_changes_only_specified_fields() {
    let mut store = new_store();
    let original = create_test_snippet(&mut store, "Sort", "python", &["algo"]);

    store
        .update(original.id, SnippetPatch::default().code("sorted(xs)"))
        .unwrap();

    let updated = store.find_by_id(original.id).unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.code, "sorted(xs)");
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.language, original.language);
    assert_eq!(updated.tags, original.tags);
}

#[test]
fn test_update_absent_id_leaves_collection_unchanged() {
    let mut store = new_store();
    create_test_snippet(&mut store, "A", "python", &[]);
    create_test_snippet(&mut store, "B", "html", &[]);
    let before = store.list().to_vec();

    store
        .update(-1, SnippetPatch::default().title("ghost").tags(vec![]))
        .unwrap();

    assert_eq!(store.list(), before.as_slice());
}

// ===== REMOVE =====

#[test]
fn test_remove_present_id() {
    let mut store = new_store();
    let a = create_test_snippet(&mut store, "A", "python", &[]);
    let b = create_test_snippet(&mut store, "B", "python", &[]);

    store.remove(a.id).unwrap();

    assert_eq!(store.find_by_id(a.id), None);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0], b);
}

#[test]
fn test_remove_absent_id_is_noop() {
    let mut store = new_store();
    create_test_snippet(&mut store, "A", "python", &[]);
    let before = store.list().to_vec();

    store.remove(12345).unwrap();

    assert_eq!(store.list(), before.as_slice());
}

// ===== PERSISTENCE =====

#[test]
fn test_restart_rehydrates_identical_collection() {
    let slot = MemorySlot::new();
    let before = {
        let mut store = open_store(&slot);
        let a = create_test_snippet(&mut store, "A", "python", &["algo"]);
        create_test_snippet(&mut store, "B", "javascript", &[]);
        create_test_snippet(&mut store, "C", "css", &["ui"]);
        store
            .update(a.id, SnippetPatch::default().title("A2"))
            .unwrap();
        store.list().to_vec()
    };

    let reopened = open_store(&slot);
    assert_eq!(reopened.list(), before.as_slice());
}

#[test]
fn test_every_mutation_is_flushed() {
    let slot = MemorySlot::new();
    let mut store = open_store(&slot);

    let a = create_test_snippet(&mut store, "A", "python", &[]);
    assert!(slot.raw(STORAGE_KEY).unwrap().contains("\"A\""));

    store.remove(a.id).unwrap();
    assert!(!slot.raw(STORAGE_KEY).unwrap().contains("\"A\""));
}

#[test]
fn test_missing_slot_starts_empty() {
    let store = open_store(&MemorySlot::new());
    assert!(store.is_empty());
}

#[test]
fn test_wrong_shape_payload_starts_empty() {
    let slot = MemorySlot::with_entry(STORAGE_KEY, r#"{"state":{"snippets":"nope"}}"#);
    let store = open_store(&slot);
    assert!(store.is_empty());
}

#[test]
fn test_ids_continue_after_rehydration() {
    let slot = MemorySlot::new();
    let last = {
        let mut store = open_store(&slot);
        create_test_snippet(&mut store, "A", "python", &[]);
        create_test_snippet(&mut store, "B", "python", &[])
    };

    let mut reopened = open_store(&slot);
    let next = create_test_snippet(&mut reopened, "C", "python", &[]);
    assert!(next.id > last.id);
}
