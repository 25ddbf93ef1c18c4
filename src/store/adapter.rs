//! Key/value persistence port and an in-memory implementation.

use rustc_hash::FxHashMap;

/// Opaque string store used to resume sessions.
///
/// Implementations wrap whatever the host platform offers (mobile key/value
/// storage, a browser's local storage, a file). Writes are last-write-wins
/// and assumed to succeed.
pub trait PersistenceAdapter {
    /// Load the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove `key`. Removing an absent key is a no-op.
    fn delete(&mut self, key: &str);
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn delete(&mut self, key: &str) {
        (**self).delete(key);
    }
}

/// Process-local store, used by tests and hosts without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersistenceAdapter for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let mut store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1".to_string());
        store.set("a", "2".to_string());
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.delete("a");
        store.delete("a");
        assert!(store.is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_through<P: PersistenceAdapter>(mut store: P) {
            store.set("k", "v".to_string());
        }

        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert!(store.contains("k"));
    }
}
