//! Core types shared across the Snippy crates
//!
//! - **Correlation**: `RequestId` attached to relay requests and error context
//! - **Sensitive data**: `Sensitive<T>` marker for provider credentials
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
