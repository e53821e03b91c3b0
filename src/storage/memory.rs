use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::storage::{KeyValueStore, StorageError};

/// In-memory `KeyValueStore`. Clones share the same map, matching the
/// way every browser storage handle sees the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();

        assert_eq!(store.get("missing"), None);

        store.set("key", "value").expect("set succeeds");
        assert_eq!(store.get("key"), Some("value".to_string()));

        store.remove("key");
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("key", "value").expect("set succeeds");

        assert_eq!(other.get("key"), Some("value".to_string()));
    }
}
