//! Values mirrored to a [`KeyValueStore`] key as JSON.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::key_value::{KeyValueStore, StorageError};

/// A value loaded from a storage key and written back on every change.
///
/// Loading never fails: a missing key, an unreadable store or a corrupt
/// blob all fall back to the initial value. Write failures are logged and
/// the in-memory value stays authoritative for the session.
pub struct Persisted<T> {
    key: String,
    value: T,
    store: Arc<dyn KeyValueStore>,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load `key` from `store`, or use `initial`.
    pub fn load(store: Arc<dyn KeyValueStore>, key: &str, initial: T) -> Self {
        let value = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Discarding corrupt value for '{}': {}", key, e);
                    initial
                }
            },
            Ok(None) => initial,
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", key, e);
                initial
            }
        };

        Self {
            key: key.to_string(),
            value,
            store,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it through.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.save();
    }

    /// Mutate the value in place and write it through.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.save();
    }

    fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::warn!("Failed to persist '{}': {}", self.key, e);
        }
    }

    fn try_save(&self) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(&self.value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::key_value::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                message: "denied".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                message: "denied".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_key_uses_initial() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let flag = Persisted::load(store, "flag", false);
        assert!(!*flag.get());
    }

    #[test]
    fn test_set_writes_json() {
        let store = Arc::new(MemoryStore::new());
        let mut ids = Persisted::load(store.clone(), "ids", Vec::<String>::new());
        ids.update(|v| v.push("exp-1".to_string()));
        assert_eq!(store.get("ids").unwrap().as_deref(), Some("[\"exp-1\"]"));

        let reloaded = Persisted::load(store, "ids", Vec::<String>::new());
        assert_eq!(reloaded.get(), &vec!["exp-1".to_string()]);
    }

    #[test]
    fn test_corrupt_blob_falls_back() {
        let store = Arc::new(MemoryStore::new());
        store.set("ids", "{not json").unwrap();
        let ids = Persisted::load(store, "ids", vec!["seed".to_string()]);
        assert_eq!(ids.get(), &vec!["seed".to_string()]);
    }

    #[test]
    fn test_failing_store_keeps_memory_value() {
        let mut flag = Persisted::load(Arc::new(FailingStore), "flag", false);
        flag.set(true);
        assert!(*flag.get());
    }
}
