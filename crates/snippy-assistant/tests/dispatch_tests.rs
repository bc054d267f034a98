mod common;

use common::seeded_store;
use proptest::prelude::*;
use serde_json::json;
use snippy_assistant::{dispatch, dispatch_on, ActionOutcome, ChatSurface};
use snippy_core::{SnippetStore, SnippyError};

#[test]
fn test_create_action_appends_snippet() {
    let mut store = seeded_store();

    let outcome = dispatch(
        &mut store,
        "create-snippet",
        json!({
            "title": "Flex center",
            "code": ".c { display: flex; }",
            "language": "css",
            "tags": ["layout"]
        }),
    )
    .unwrap();

    let ActionOutcome::Created { snippet } = outcome else {
        panic!("expected a created snippet");
    };
    assert_eq!(store.len(), 3);
    assert_eq!(store.list()[2], snippet);
    assert_eq!(snippet.tags, vec!["layout".to_string()]);
}

#[test]
fn test_identical_create_twice_yields_one_entry() {
    let mut store = SnippetStore::in_memory();
    let args = json!({ "title": "Hello", "code": "print('hi')", "language": "python" });

    let first = dispatch(&mut store, "create-snippet", args.clone()).unwrap();
    let second = dispatch(&mut store, "create-snippet", args).unwrap();

    let ActionOutcome::Created { snippet } = first else {
        panic!("first create should apply");
    };
    assert_eq!(
        second,
        ActionOutcome::SkippedDuplicate {
            existing_id: snippet.id
        }
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_same_title_and_code_in_other_language_is_not_duplicate() {
    let mut store = SnippetStore::in_memory();
    dispatch(
        &mut store,
        "create-snippet",
        json!({ "title": "Log", "code": "log(x)", "language": "javascript" }),
    )
    .unwrap();
    dispatch(
        &mut store,
        "create-snippet",
        json!({ "title": "Log", "code": "log(x)", "language": "python" }),
    )
    .unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn test_update_action_touches_only_supplied_fields() {
    let mut store = seeded_store();
    let id = store.list()[1].id;

    let outcome = dispatch(
        &mut store,
        "update-snippet",
        json!({ "id": id, "title": "Quicksort" }),
    )
    .unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::Updated {
            snippet_id: id,
            matched: true
        }
    );
    let updated = store.find_by_id(id).unwrap();
    assert_eq!(updated.title, "Quicksort");
    assert_eq!(updated.code, "def qs(xs): ...");
    assert_eq!(updated.language, "python");
    assert_eq!(updated.tags, vec!["algo".to_string()]);
}

#[test]
fn test_delete_action_and_unknown_id() {
    let mut store = seeded_store();
    let id = store.list()[0].id;

    let removed = dispatch(&mut store, "delete-snippet", json!({ "id": id })).unwrap();
    let again = dispatch(&mut store, "delete-snippet", json!({ "id": id })).unwrap();

    assert_eq!(
        removed,
        ActionOutcome::Deleted {
            snippet_id: id,
            matched: true
        }
    );
    assert_eq!(
        again,
        ActionOutcome::Deleted {
            snippet_id: id,
            matched: false
        }
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_with_blank_title_is_rejected() {
    let mut store = SnippetStore::in_memory();

    let result = dispatch(
        &mut store,
        "create-snippet",
        json!({ "title": "  ", "code": "x" }),
    );

    assert!(matches!(result, Err(SnippyError::InvalidTitle { .. })));
    assert!(store.is_empty());
}

#[test]
fn test_missing_required_argument() {
    let mut store = SnippetStore::in_memory();

    let result = dispatch(&mut store, "create-snippet", json!({ "title": "T" }));

    assert!(matches!(
        result,
        Err(SnippyError::InvalidArguments { ref action, .. }) if action == "create-snippet"
    ));
}

#[test]
fn test_unknown_action_is_error() {
    let mut store = seeded_store();
    let result = dispatch(&mut store, "archive-snippet", json!({ "id": 1 }));
    assert!(matches!(result, Err(SnippyError::UnknownAction { .. })));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_detail_surface_refuses_delete() {
    let mut store = seeded_store();
    let id = store.list()[0].id;

    let result = dispatch_on(
        ChatSurface::Detail,
        &mut store,
        "delete-snippet",
        json!({ "id": id }),
    );

    assert!(matches!(result, Err(SnippyError::UnknownAction { .. })));
    assert!(store.find_by_id(id).is_some());
}

proptest! {
    #[test]
    fn prop_repeated_identical_creates_keep_one_entry(
        title in "[a-zA-Z][a-zA-Z ]{0,15}",
        code in "[ -~]{1,30}",
        repeats in 2usize..6,
    ) {
        let mut store = SnippetStore::in_memory();
        let args = json!({ "title": title, "code": code, "language": "python" });

        for _ in 0..repeats {
            dispatch(&mut store, "create-snippet", args.clone()).unwrap();
        }

        prop_assert_eq!(store.len(), 1);
    }
}
