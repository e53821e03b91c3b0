use gloo::storage::{LocalStorage, Storage};

use crate::storage::{KeyValueStore, StorageError};

/// `KeyValueStore` over the browser's local storage. Values are stored
/// raw; each key decides its own encoding (`"teams"` holds a JSON
/// array, `"username"` a plain string).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}
