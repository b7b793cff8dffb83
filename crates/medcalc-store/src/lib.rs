//! medcalc-store
//!
//! Favorites/recents facade for the presentation layer. The scoring
//! engine never depends on this crate; it exists so UI glue can persist
//! calculator bookmarks behind a minimal get/set/list capability.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One saved calculator reference (a favorite or a recent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedEntry {
    pub id: Uuid,
    pub rule_id: String,
    pub saved_at: jiff::Timestamp,
}

impl SavedEntry {
    pub fn new(rule_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            rule_id: rule_id.to_string(),
            saved_at: jiff::Timestamp::now(),
        }
    }
}

/// Minimal key-value capability for favorites/recents. Implementations
/// decide where entries live; callers depend only on this trait.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<SavedEntry>, StoreError>;

    fn set(&self, key: &str, entry: SavedEntry) -> Result<(), StoreError>;

    /// All entries, most recently saved first.
    fn list(&self) -> Result<Vec<SavedEntry>, StoreError>;
}
