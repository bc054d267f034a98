//! Snippy Assistant - store mutations exposed as chat-agent actions
//!
//! - `action_specs()`: the action inventory with parameter schemas
//! - `dispatch()`: route a named action with JSON arguments to the store
//! - `ReadableContext`: what the agent is allowed to read
//! - `ChatSurface`: per-page instructions and available actions

pub mod actions;
pub mod context;
pub mod dispatch;
pub mod surface;

pub use actions::{action_specs, ActionParameter, ActionSpec, ParamKind};
pub use context::ReadableContext;
pub use dispatch::{dispatch, dispatch_on, ActionOutcome, AssistantAction};
pub use surface::ChatSurface;
