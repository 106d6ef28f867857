//! Active option tracking for selector and multi-select widgets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::storage::{StoreError, StoreResult, ValueStore};

/// How many options can be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Selecting an option replaces the previous one.
    Single,
    /// Selecting an option toggles it.
    Multi,
}

/// The semantic value of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SelectionValue {
    None,
    One(String),
    Many(Vec<String>),
}

/// Tracks which options of a widget are active.
///
/// Independent of hover animation; updated on click.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    mode: SelectionMode,
    values: Vec<String>,
    active: BTreeSet<usize>,
}

impl SelectionModel {
    /// Create a model over the given option values, nothing active.
    pub fn new(mode: SelectionMode, values: Vec<String>) -> Self {
        Self {
            mode,
            values,
            active: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Select the option at `index`.
    ///
    /// Single mode replaces the selection, multi mode toggles the option.
    /// Returns false if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            return false;
        }
        match self.mode {
            SelectionMode::Single => {
                self.active.clear();
                self.active.insert(index);
            }
            SelectionMode::Multi => {
                if !self.active.remove(&index) {
                    self.active.insert(index);
                }
            }
        }
        true
    }

    /// Replace the active set. Out-of-range indices are dropped; single
    /// mode keeps only the first valid index.
    pub fn set_active(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.active.clear();
        for index in indices {
            if index >= self.values.len() {
                continue;
            }
            self.active.insert(index);
            if self.mode == SelectionMode::Single {
                break;
            }
        }
    }

    /// Clear all active options.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    /// Active indices in ascending order.
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().copied()
    }

    /// Index of the option with `value`.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Current value.
    pub fn value(&self) -> SelectionValue {
        let mut selected: Vec<String> = self
            .active
            .iter()
            .filter_map(|&i| self.values.get(i).cloned())
            .collect();
        match (self.mode, selected.len()) {
            (_, 0) => SelectionValue::None,
            (SelectionMode::Single, _) => SelectionValue::One(selected.swap_remove(0)),
            (SelectionMode::Multi, _) => SelectionValue::Many(selected),
        }
    }

    /// Write the current value to `store` under `key`.
    pub fn persist(&self, store: &dyn ValueStore, key: &str) -> StoreResult<()> {
        let json = serde_json::to_string(&self.value())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        store.save(key, &json)
    }

    /// Restore the value stored under `key`.
    ///
    /// Values that no longer match an option are skipped. Returns false if
    /// nothing was stored.
    pub fn restore(&mut self, store: &dyn ValueStore, key: &str) -> StoreResult<bool> {
        let json = match store.load(key) {
            Ok(json) => json,
            Err(StoreError::NotFound(_)) => return Ok(false),
            Err(e) => return Err(e),
        };
        let value: SelectionValue =
            serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let indices: Vec<usize> = match value {
            SelectionValue::None => Vec::new(),
            SelectionValue::One(v) => self.index_of(&v).into_iter().collect(),
            SelectionValue::Many(vs) => vs.iter().filter_map(|v| self.index_of(v)).collect(),
        };
        self.set_active(indices);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn values() -> Vec<String> {
        ["small", "medium", "large"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_single_select_replaces() {
        let mut model = SelectionModel::new(SelectionMode::Single, values());
        assert_eq!(model.value(), SelectionValue::None);

        assert!(model.select(0));
        assert!(model.select(2));
        assert!(!model.is_active(0));
        assert_eq!(model.value(), SelectionValue::One("large".to_string()));
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut model = SelectionModel::new(SelectionMode::Multi, values());
        model.select(2);
        model.select(0);
        assert_eq!(
            model.value(),
            SelectionValue::Many(vec!["small".to_string(), "large".to_string()])
        );

        model.select(2);
        assert_eq!(model.active().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut model = SelectionModel::new(SelectionMode::Single, values());
        assert!(!model.select(3));
        model.set_active([7, 1, 2]);
        assert_eq!(model.active().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_persist_and_restore() {
        let store = MemoryStore::new();
        let mut model = SelectionModel::new(SelectionMode::Multi, values());
        model.select(1);
        model.select(2);
        model.persist(&store, "sizes").unwrap();

        let mut restored = SelectionModel::new(SelectionMode::Multi, values());
        assert!(restored.restore(&store, "sizes").unwrap());
        assert_eq!(restored.value(), model.value());
    }

    #[test]
    fn test_restore_skips_unknown_values() {
        let store = MemoryStore::new();
        store
            .save("sizes", r#"{"type":"many","value":["huge","small"]}"#)
            .unwrap();

        let mut model = SelectionModel::new(SelectionMode::Multi, values());
        assert!(model.restore(&store, "sizes").unwrap());
        assert_eq!(
            model.value(),
            SelectionValue::Many(vec!["small".to_string()])
        );
    }

    #[test]
    fn test_restore_missing_key() {
        let store = MemoryStore::new();
        let mut model = SelectionModel::new(SelectionMode::Single, values());
        assert!(!model.restore(&store, "nothing").unwrap());
    }

    #[test]
    fn test_restore_malformed() {
        let store = MemoryStore::new();
        store.save("size", "not json").unwrap();
        let mut model = SelectionModel::new(SelectionMode::Single, values());
        assert!(matches!(
            model.restore(&store, "size"),
            Err(StoreError::Serialization(_))
        ));
    }
}
