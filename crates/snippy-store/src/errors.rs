//! Error helpers for snippy-store
//!
//! Builds core `ExError` values with slot-specific context.

use std::path::Path;

use snippy_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Filesystem failure while touching a slot file
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Slot key that cannot be turned into a file name
pub fn invalid_key(key: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("slot_path")
        .with_entity_id(key.to_string())
        .with_message("slot key must be a plain file name")
}

/// Slot file exists but is not valid UTF-8
pub fn not_utf8(path: &Path) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("read_slot")
        .with_entity_id(path.display().to_string())
        .with_message("slot file is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_path() {
        let err = io_error(
            "write_slot",
            Path::new("/tmp/x.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.entity_id(), Some("/tmp/x.json"));
        assert_eq!(err.op(), Some("write_slot"));
    }

    #[test]
    fn test_invalid_key_code() {
        assert_eq!(invalid_key("../x").code(), "ERR_PERSISTENCE");
    }
}
