//! `ValueStore` over the browser's `localStorage`.

use hoverline_core::{StoreError, StoreResult, ValueStore};
use web_sys::Storage;

/// Key prefix for every stored widget value.
pub const KEY_PREFIX: &str = "hoverline:";

/// localStorage-backed value store.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the window's localStorage.
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }

    fn full_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }
}

impl ValueStore for LocalStore {
    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(&Self::full_key(key), value)
            .map_err(|e| StoreError::Other(format!("Failed to save {}: {:?}", key, e)))
    }

    fn load(&self, key: &str) -> StoreResult<String> {
        self.storage
            .get_item(&Self::full_key(key))
            .map_err(|e| StoreError::Other(format!("Failed to load {}: {:?}", key, e)))?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.storage
            .remove_item(&Self::full_key(key))
            .map_err(|e| StoreError::Other(format!("Failed to delete {}: {:?}", key, e)))
    }
}
