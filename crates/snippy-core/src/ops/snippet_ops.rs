//! Validated snippet operations
//!
//! The entry points used by forms, the CLI and the assistant. Input is
//! validated here, then handed to the (non-validating) store. Each operation
//! logs a start and an end/end_error event.

use std::time::Instant;

use super::store::SnippetStore;
use crate::errors::{Result, SnippyError};
use crate::model::{NewSnippet, Snippet, SnippetId, SnippetPatch};
use crate::{log_op_end, log_op_error, log_op_start};

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Create a snippet after checking the required fields
///
/// # Errors
/// * `InvalidTitle` - title is empty or whitespace-only
/// * `InvalidCode` - code is empty
/// * `Storage` - the store could not flush
pub fn create_snippet(store: &mut SnippetStore, input: NewSnippet) -> Result<Snippet> {
    let start = Instant::now();
    log_op_start!("create_snippet");

    let result = validate_new(&input).and_then(|()| {
        store.create(input.title, input.code, input.language, input.tags)
    });

    match &result {
        Ok(snippet) => {
            log_op_end!(
                "create_snippet",
                duration_ms = elapsed_ms(start),
                snippet_id = snippet.id
            );
        }
        Err(err) => {
            log_op_error!("create_snippet", err.clone(), duration_ms = elapsed_ms(start));
        }
    }
    result
}

fn validate_new(input: &NewSnippet) -> Result<()> {
    if input.title.trim().is_empty() {
        return Err(SnippyError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }
    if input.code.is_empty() {
        return Err(SnippyError::InvalidCode {
            reason: "Code cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Look up one snippet
///
/// # Errors
/// * `SnippetNotFound` - no snippet has this id
pub fn read_snippet(store: &SnippetStore, id: SnippetId) -> Result<&Snippet> {
    store
        .find_by_id(id)
        .ok_or(SnippyError::SnippetNotFound { snippet_id: id })
}

/// Apply a partial update
///
/// Unknown ids are a silent no-op, matching the store.
///
/// # Errors
/// * `Storage` - the store could not flush
pub fn update_snippet(store: &mut SnippetStore, id: SnippetId, patch: SnippetPatch) -> Result<()> {
    let start = Instant::now();
    log_op_start!("update_snippet", snippet_id = id);

    let present = store.find_by_id(id).is_some();
    let result = store.update(id, patch);

    match &result {
        Ok(()) => {
            log_op_end!(
                "update_snippet",
                duration_ms = elapsed_ms(start),
                snippet_id = id,
                matched = present
            );
        }
        Err(err) => {
            log_op_error!(
                "update_snippet",
                err.clone(),
                duration_ms = elapsed_ms(start),
                snippet_id = id
            );
        }
    }
    result
}

/// Remove a snippet; unknown ids are a silent no-op
///
/// # Errors
/// * `Storage` - the store could not flush
pub fn remove_snippet(store: &mut SnippetStore, id: SnippetId) -> Result<()> {
    let start = Instant::now();
    log_op_start!("remove_snippet", snippet_id = id);

    let present = store.find_by_id(id).is_some();
    let result = store.remove(id);

    match &result {
        Ok(()) => {
            log_op_end!(
                "remove_snippet",
                duration_ms = elapsed_ms(start),
                snippet_id = id,
                matched = present
            );
        }
        Err(err) => {
            log_op_error!(
                "remove_snippet",
                err.clone(),
                duration_ms = elapsed_ms(start),
                snippet_id = id
            );
        }
    }
    result
}
