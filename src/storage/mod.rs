#[cfg(feature = "yew")]
mod browser;
mod memory;

use thiserror::Error;

#[cfg(feature = "yew")]
pub use browser::BrowserStore;
pub use memory::MemoryStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Injected key-value capability. Repositories take one of these rather
/// than reaching for the browser directly, so the domain layer tests
/// against [`MemoryStore`].
///
/// `get` of a missing key is `None`; corrupt values are tolerated by
/// the caller, not here.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}
