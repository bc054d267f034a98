//! Redaction wrapper for secrets
//!
//! Provider API keys travel through configuration structs that derive
//! `Debug`; wrapping them keeps the key out of logs and panic messages.

use std::fmt;

/// Wrapper that prints `***REDACTED***` for Debug and Display
///
/// # Example
///
/// ```
/// use snippy_core_types::Sensitive;
///
/// let key = Sensitive::new("gsk_live_123");
/// assert_eq!(format!("{:?}", key), "***REDACTED***");
/// assert_eq!(key.expose(), &"gsk_live_123");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value (only at the point of use, e.g. an auth header)
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
