pub mod id_gen;
pub mod slot;
pub mod snippet_ops;
pub mod store;

pub use id_gen::{ClockIdGenerator, IdGenerator, SequentialIdGenerator};
pub use slot::{MemorySlot, SnippetSlot, STORAGE_KEY};
pub use store::{SnippetStore, SubscriptionId};
