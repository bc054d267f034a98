mod common;

use common::{add, snippy, stderr, stdout};
use tempfile::TempDir;

#[test]
fn test_assist_actions_lists_inventory() {
    let temp_dir = TempDir::new().unwrap();

    let output = snippy(&temp_dir, &["assist", "actions"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = value["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["create-snippet", "update-snippet", "delete-snippet"]);
    assert!(value["instructions"]
        .as_str()
        .unwrap()
        .starts_with("You are assisting the user with managing code snippets"));
}

#[test]
fn test_assist_run_create_skips_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let args = r#"{"title":"Hello","code":"print(1)","language":"python"}"#;

    let first = snippy(&temp_dir, &["assist", "run", "create-snippet", args]);
    let second = snippy(&temp_dir, &["assist", "run", "create-snippet", args]);

    assert!(stdout(&first).starts_with("Created snippet"));
    assert!(stdout(&second).starts_with("Snippet already exists as"));
    let list = stdout(&snippy(&temp_dir, &["list"]));
    assert_eq!(list.lines().count(), 1);
}

#[test]
fn test_assist_run_unknown_action_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = snippy(&temp_dir, &["assist", "run", "archive-snippet", "{}"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown action: archive-snippet"));
}

#[test]
fn test_assist_detail_surface_refuses_delete() {
    let temp_dir = TempDir::new().unwrap();
    let id = add(&temp_dir, "Keep", "k()", "javascript", &[]);
    let args = format!(r#"{{"id":{}}}"#, id);

    let output = snippy(
        &temp_dir,
        &["assist", "run", "delete-snippet", &args, "--surface", "detail"],
    );

    assert!(!output.status.success());
    assert!(stdout(&snippy(&temp_dir, &["list"])).contains("Keep"));
}

#[test]
fn test_assist_context_for_snippet_and_missing_id() {
    let temp_dir = TempDir::new().unwrap();
    let id = add(&temp_dir, "Ctx", "c()", "javascript", &[]);

    let found = stdout(&snippy(&temp_dir, &["assist", "context", "--id", &id.to_string()]));
    let missing = stdout(&snippy(&temp_dir, &["assist", "context", "--id", "1"]));

    let found: serde_json::Value = serde_json::from_str(&found).unwrap();
    let missing: serde_json::Value = serde_json::from_str(&missing).unwrap();
    assert_eq!(found["description"], "A code snippet");
    assert_eq!(found["value"]["title"], "Ctx");
    assert_eq!(missing["value"], serde_json::json!({}));
}
