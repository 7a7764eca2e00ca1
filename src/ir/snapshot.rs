//! Snapshot building for entry trees
//!
//! A snapshot is an owned, nested copy of a subtree, detached from the arena
//! and its ids. Serializers and debugging dumps should consume snapshots
//! rather than reimplementing tree traversal.

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::tree::{EntryId, EntryTree};

/// Owned, nested view of one subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub entry: Entry,
    pub children: Vec<EntrySnapshot>,
}

impl EntrySnapshot {
    /// Total number of nodes in this snapshot, itself included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(EntrySnapshot::node_count)
            .sum::<usize>()
    }

    /// Render the snapshot as JSON for dumps and golden comparisons.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl EntryTree {
    /// Snapshot the subtree at `id`, or `None` for a stale id.
    pub fn snapshot(&self, id: EntryId) -> Option<EntrySnapshot> {
        let entry = self.get(id)?.clone();
        let children = self
            .children_of(id)
            .to_vec()
            .into_iter()
            .filter_map(|child| self.snapshot(child))
            .collect();
        Some(EntrySnapshot { entry, children })
    }
}
