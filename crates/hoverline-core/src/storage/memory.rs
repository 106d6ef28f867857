//! In-memory value store.

use super::{StoreError, StoreResult, ValueStore};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory store for tests, the native demo and ephemeral widgets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl ValueStore for MemoryStore {
    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<String> {
        self.values
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap(), "dark");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_not_found() {
        let store = MemoryStore::new();
        let result = store.load("nonexistent");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_exists() {
        let store = MemoryStore::new();
        assert!(!store.exists("size").unwrap());
        store.save("size", "m").unwrap();
        assert!(store.exists("size").unwrap());
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        store.save("size", "m").unwrap();
        store.delete("size").unwrap();
        store.delete("size").unwrap();
        assert!(store.is_empty());
    }
}
