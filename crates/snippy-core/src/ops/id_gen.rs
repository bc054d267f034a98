//! Snippet id generation
//!
//! The store asks an injected generator for each new id. Neither generator
//! checks the collection for collisions.

use chrono::Utc;

use crate::model::SnippetId;

/// Source of ids for newly created snippets
pub trait IdGenerator: Send {
    /// Produce the id for the next created snippet
    fn next_id(&mut self) -> SnippetId;

    /// Called for every id found during rehydration
    fn observe(&mut self, _existing: SnippetId) {}
}

/// Wall-clock milliseconds since the Unix epoch
///
/// Two creations in the same millisecond receive the same id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockIdGenerator;

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> SnippetId {
        Utc::now().timestamp_millis()
    }
}

/// Monotonic counter
///
/// After rehydration the counter continues past the largest observed id.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: SnippetId,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: SnippetId) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> SnippetId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    fn observe(&mut self, existing: SnippetId) {
        if existing >= self.next {
            self.next = existing.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_increase() {
        let mut gen = SequentialIdGenerator::new();
        assert_eq!(gen.next_id(), 1);
        assert_eq!(gen.next_id(), 2);
        assert_eq!(gen.next_id(), 3);
    }

    #[test]
    fn test_sequential_skips_past_observed() {
        let mut gen = SequentialIdGenerator::new();
        gen.observe(10);
        gen.observe(4);
        assert_eq!(gen.next_id(), 11);
    }

    #[test]
    fn test_clock_ids_are_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let id = ClockIdGenerator.next_id();
        let after = Utc::now().timestamp_millis();
        assert!(id >= before && id <= after);
    }
}
