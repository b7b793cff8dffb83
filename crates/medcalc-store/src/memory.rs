use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::StoreError;
use crate::{KeyValueStore, SavedEntry};

/// In-memory store, used by tests and as the default until the UI
/// layer wires up a persistent backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, SavedEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<SavedEntry>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, entry: SavedEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        debug!(key, rule.id = %entry.rule_id, "saved entry");
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SavedEntry>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        let mut all: Vec<SavedEntry> = entries.values().cloned().collect();
        all.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(all)
    }
}
