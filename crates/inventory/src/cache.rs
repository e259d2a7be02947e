//! Session-scoped cache of per-record sync outcomes.

use std::collections::HashMap;

use vendash_core::{InventoryId, SyncStatus};

/// Sync outcomes keyed by inventory record.
///
/// Entries are replaced wholesale on each refresh, never merged: the backend
/// reports one entry per seller app contacted during the most recent sync
/// attempt, and that list is the only truth worth keeping.
#[derive(Debug, Default)]
pub struct SyncStatusCache {
    entries: HashMap<InventoryId, Vec<SyncStatus>>,
}

impl SyncStatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list for `id` wholesale.
    pub fn replace(&mut self, id: InventoryId, statuses: Vec<SyncStatus>) {
        self.entries.insert(id, statuses);
    }

    /// Sync outcomes for `id`; empty when the record has never synced.
    pub fn get(&self, id: InventoryId) -> &[SyncStatus] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
