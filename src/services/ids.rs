//! Transaction identifier generation

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh transaction identifiers
pub trait IdGenerator {
    /// Produce a new identifier, unique within practical probability bounds
    fn new_id(&self) -> String;
}

/// Random v4 UUIDs; the production id source
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids (`id-0`, `id-1`, ...) for tests
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    counter: AtomicU64,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceGenerator {
    fn new_id(&self) -> String {
        format!("id-{}", self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids = UuidGenerator;
        assert_ne!(ids.new_id(), ids.new_id());
    }

    #[test]
    fn test_sequence_ids() {
        let ids = SequenceGenerator::new();
        assert_eq!(ids.new_id(), "id-0");
        assert_eq!(ids.new_id(), "id-1");
    }
}
