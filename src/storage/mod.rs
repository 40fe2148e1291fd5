//! Persistence layer
//!
//! The ledger persists through a minimal durable key-value contract: the
//! whole transaction collection is serialized as one value under one fixed
//! key. Implementations: [`FileStore`] for real use, [`MemoryStore`] for
//! tests.

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::TallyResult;

/// Durable key-value storage used by the ledger
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> TallyResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> TallyResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> TallyResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TallyResult<()> {
        (**self).set(key, value)
    }
}
