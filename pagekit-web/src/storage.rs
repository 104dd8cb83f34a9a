//! `localStorage` backed preference store.

use pagekit_core::PreferenceStore;
use web_sys::Storage;

use crate::dom::{self, js_error_message};

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("Storage error: {0}")]
    Storage(String),
}

/// The origin's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Access the browser `localStorage` handle.
    ///
    /// # Errors
    /// Returns an error if there is no window or storage is disabled.
    pub fn open() -> Result<Self, WebStorageError> {
        let storage = dom::window()
            .ok_or(WebStorageError::Unavailable)?
            .local_storage()
            .map_err(|e| WebStorageError::Storage(js_error_message(&e)))?
            .ok_or(WebStorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    type Error = WebStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(js_error_message(&e)))
    }
}
