//! Canonical schema constants for structured logging
//!
//! The `log_op_*` macros emit these envelope fields and event names, and
//! the test capture layer reads them back.

// Envelope
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
