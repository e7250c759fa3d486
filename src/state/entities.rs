//! Entity records and permissions for reusable blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reusable-block records are shared content referenced by id from block
//! instances. This store is a read-mostly projection; the only local
//! mutation is dropping a record after the server confirms its deletion.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::ReusableBlockRecord;

/// Reusable-block records plus the delete permissions granted to the
/// current user.
#[derive(Clone, Debug, Default)]
pub struct EntitiesState {
    /// Records keyed by reference id.
    pub reusable_blocks: HashMap<String, ReusableBlockRecord>,
    /// Reference ids the current user may delete.
    pub deletable_ids: HashSet<String>,
}

impl EntitiesState {
    /// Look up a reusable-block record by reference id.
    pub fn reusable_block(&self, id: &str) -> Option<&ReusableBlockRecord> {
        self.reusable_blocks.get(id)
    }

    /// Whether the current user may delete the given record.
    pub fn can_delete_reusable_block(&self, id: &str) -> bool {
        self.deletable_ids.contains(id)
    }

    /// Insert or replace a reusable-block record.
    pub fn upsert_reusable_block(&mut self, record: ReusableBlockRecord) {
        self.reusable_blocks.insert(record.id.clone(), record);
    }

    /// Drop a record after a confirmed server-side delete.
    pub fn remove_reusable_block(&mut self, id: &str) {
        self.reusable_blocks.remove(id);
        self.deletable_ids.remove(id);
    }
}
