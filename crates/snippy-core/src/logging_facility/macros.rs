//! Canonical logging macros
//!
//! Every operation boundary logs one `start` and exactly one of `end` /
//! `end_error`, tagged with the calling module as `component`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use snippy_core::log_op_start;
/// log_op_start!("create_snippet");
/// log_op_start!("update_snippet", snippet_id = 1712000000000_i64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::snippy_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::snippy_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use snippy_core::log_op_end;
/// log_op_end!("create_snippet", duration_ms = 3);
/// log_op_end!("list_snippets", duration_ms = 0, snippet_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::snippy_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::snippy_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into `ExError` so that `err_kind` and `err_code`
/// are always present. A request id carried by the error is logged as
/// `request_id`.
///
/// # Example
///
/// ```
/// # use snippy_core::{log_op_error, errors::SnippyError};
/// let err = SnippyError::SnippetNotFound { snippet_id: 1 };
/// log_op_error!("read_snippet", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::snippy_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            request_id = ex_err.request_id().map(|id| id.as_str()),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::snippy_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            request_id = ex_err.request_id().map(|id| id.as_str()),
            $($field)*
        );
    }};
}
