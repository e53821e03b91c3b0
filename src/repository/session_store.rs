use crate::storage::{KeyValueStore, StorageError};

pub const USERNAME_KEY: &str = "username";

/// The locally held display identity. The username is persisted
/// verbatim with nothing backing it; there is no credential check and
/// no expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S> SessionStore<S>
where
    S: KeyValueStore,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn login(&self, username: &str) -> Result<(), StorageError> {
        self.storage.set(USERNAME_KEY, username)
    }

    pub fn logout(&self) {
        self.storage.remove(USERNAME_KEY);
    }

    /// The persisted username, if any. Absence is not an error.
    pub fn restore(&self) -> Option<String> {
        self.storage.get(USERNAME_KEY)
    }
}
