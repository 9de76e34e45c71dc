//! In-memory key-value store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// A key-value store backed by a shared in-memory map.
///
/// Clones share the same backing map, mirroring how every browser tab sees
/// the same origin storage. There is no versioning or locking across handles;
/// whole-value writes silently overwrite each other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<FxHashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, FxHashMap<String, String>> {
        // A poisoned map is still a valid map; the panic that poisoned it
        // belongs to whoever panicked, not to this reader.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_what_set_stored() -> testresult::TestResult {
        let store = MemoryStore::new();
        store.set("k", "v")?;

        assert_eq!(store.get("k")?, Some("v".to_owned()));
        Ok(())
    }

    #[test]
    fn get_on_absent_key_is_none() -> testresult::TestResult {
        let store = MemoryStore::new();

        assert_eq!(store.get("missing")?, None);
        Ok(())
    }

    #[test]
    fn remove_is_idempotent() -> testresult::TestResult {
        let store = MemoryStore::new();
        store.set("k", "v")?;
        store.remove("k")?;
        store.remove("k")?;

        assert_eq!(store.get("k")?, None);
        Ok(())
    }

    #[test]
    fn clones_share_the_backing_map() -> testresult::TestResult {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "from-first-handle")?;

        assert_eq!(other.get("k")?, Some("from-first-handle".to_owned()));
        Ok(())
    }
}
