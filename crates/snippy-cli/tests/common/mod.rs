use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the `snippy` binary against the data directory inside `temp_dir`
#[allow(dead_code)]
pub fn snippy(temp_dir: &TempDir, args: &[&str]) -> Output {
    snippy_with_env(temp_dir, args, &[])
}

/// Same as `snippy`, with extra environment variables
#[allow(dead_code)]
pub fn snippy_with_env(temp_dir: &TempDir, args: &[&str], env: &[(&str, &str)]) -> Output {
    let data_dir = temp_dir.path().join("data");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_snippy"));
    cmd.current_dir(temp_dir.path())
        .env_remove("GROQ_API_KEY")
        .env_remove("SNIPPY_PROVIDER_URL")
        .env_remove("SNIPPY_MODEL")
        .env_remove("SNIPPY_LOG_PROFILE")
        .arg("--data-dir")
        .arg(&data_dir)
        .args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute CLI")
}

#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create a snippet and return its id
#[allow(dead_code)]
pub fn add(temp_dir: &TempDir, title: &str, code: &str, language: &str, tags: &[&str]) -> i64 {
    let mut args = vec![
        "add", "--title", title, "--code", code, "--language", language,
    ];
    for tag in tags {
        args.push("--tag");
        args.push(tag);
    }
    let output = snippy(temp_dir, &args);
    assert!(output.status.success(), "add failed: {}", stderr(&output));
    stdout(&output)
        .trim()
        .strip_prefix("Created snippet ")
        .and_then(|id| id.parse().ok())
        .expect("add should print the new id")
}
