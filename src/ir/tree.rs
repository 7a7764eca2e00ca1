//! Entry tree
//!
//! One `EntryTree` holds every entry produced while scanning a single file:
//! the permanent tree, rooted at [`EntryTree::root`], plus any detached
//! scratch nodes currently being filled. All nodes live in one arena and are
//! addressed by [`EntryId`]; the parent back-reference is a non-owning arena
//! relation, so a node is owned by exactly one child sequence at a time.
//!
//! Freed slots are tombstoned and ids are never reused: a stale `EntryId`
//! can never alias a different node. Lookups through a stale id return
//! `None` and mutations through one are no-ops.
//!
//! Construction is strictly single-threaded and sequential; one tree per
//! file, no sharing across files. No operation blocks or performs I/O.

use super::entry::Entry;

/// Handle to a node inside an [`EntryTree`].
///
/// Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u32);

impl EntryId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Slot {
    entry: Entry,
    parent: Option<EntryId>,
    children: Vec<EntryId>,
}

impl Slot {
    fn detached(entry: Entry) -> Self {
        Self {
            entry,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-owned tree of [`Entry`] records for one scanned file.
#[derive(Debug, Clone)]
pub struct EntryTree {
    slots: Vec<Option<Slot>>,
    root: EntryId,
    live: usize,
}

impl EntryTree {
    /// Create a tree seeded with an empty root node.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Slot::detached(Entry::new()))],
            root: EntryId(0),
            live: 1,
        }
    }

    /// The root node of the permanent tree.
    pub fn root(&self) -> EntryId {
        self.root
    }

    /// Allocate a fresh, detached default node: a scratch slot the front end
    /// fills by direct field assignment.
    pub fn alloc(&mut self) -> EntryId {
        let id = EntryId(self.slots.len() as u32);
        self.slots.push(Some(Slot::detached(Entry::new())));
        self.live += 1;
        id
    }

    /// Number of live nodes, scratch nodes included.
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Does `id` name a live node of this tree?
    pub fn contains(&self, id: EntryId) -> bool {
        self.slot(id).is_some()
    }

    /// The entry at `id`, or `None` for a stale id.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.slot(id).map(|slot| &slot.entry)
    }

    /// Mutable access to the entry at `id`, or `None` for a stale id.
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.slot_mut(id).map(|slot| &mut slot.entry)
    }

    /// The entry at `id`.
    ///
    /// Panics if `id` is stale; use [`get`](Self::get) when that is not
    /// already known to be impossible.
    pub fn entry(&self, id: EntryId) -> &Entry {
        match self.get(id) {
            Some(entry) => entry,
            None => panic!("use of stale {:?}", id),
        }
    }

    /// Mutable access to the entry at `id`.
    ///
    /// Panics if `id` is stale; use [`get_mut`](Self::get_mut) when that is
    /// not already known to be impossible.
    pub fn entry_mut(&mut self, id: EntryId) -> &mut Entry {
        match self.get_mut(id) {
            Some(entry) => entry,
            None => panic!("use of stale {:?}", id),
        }
    }

    /// Parent of `id`, or `None` for the root, detached nodes, and stale ids.
    pub fn parent_of(&self, id: EntryId) -> Option<EntryId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// Children of `id` in source order; empty for leaves and stale ids.
    pub fn children_of(&self, id: EntryId) -> &[EntryId] {
        match self.slot(id) {
            Some(slot) => slot.children.as_slice(),
            None => &[],
        }
    }

    /// Append `src` as the last child of `dst`, transferring ownership.
    ///
    /// `src` is detached from any previous parent in the same operation; its
    /// parent back-reference is set to `dst`. Afterwards `src` is reachable
    /// only through `dst`'s child sequence and must not be treated as an
    /// independent node. No entry data is copied or cloned.
    ///
    /// Making `dst` a descendant of `src` is a precondition violation and is
    /// not checked; cycle concerns belong to semantic resolution.
    pub fn move_to_subentry_and_keep(&mut self, dst: EntryId, src: EntryId) {
        if dst == src || !self.contains(dst) || !self.contains(src) {
            return;
        }
        self.detach(src);
        if let Some(slot) = self.slot_mut(dst) {
            slot.children.push(src);
        }
        if let Some(slot) = self.slot_mut(src) {
            slot.parent = Some(dst);
        }
    }

    /// Transfer as [`move_to_subentry_and_keep`](Self::move_to_subentry_and_keep),
    /// then replace `*src` with a brand-new default node.
    ///
    /// The caller continues filling the next declaration through the same
    /// slot variable, with no separate allocation call.
    pub fn move_to_subentry_and_refresh(&mut self, dst: EntryId, src: &mut EntryId) {
        self.move_to_subentry_and_keep(dst, *src);
        *src = self.alloc();
    }

    /// Deep-duplicate `src`'s entire subtree and append the duplicate as the
    /// last child of `dst`, returning the duplicate's id.
    ///
    /// `src` and its subtree are left untouched and remain independently
    /// mutable; the copy shares no data with the original. Returns `None` if
    /// either id is stale.
    pub fn copy_to_subentry(&mut self, dst: EntryId, src: EntryId) -> Option<EntryId> {
        if !self.contains(dst) || !self.contains(src) {
            return None;
        }
        let copy = self.clone_subtree(src);
        self.move_to_subentry_and_keep(dst, copy);
        Some(copy)
    }

    /// Remove `child` from `parent`'s child sequence and destroy it and its
    /// subtree.
    ///
    /// Strict no-op when `child` is not a direct child of `parent`: nothing
    /// is unlinked and nothing is destroyed. Remaining children keep their
    /// relative order.
    pub fn remove_subentry(&mut self, parent: EntryId, child: EntryId) {
        let position = match self.slot(parent) {
            Some(slot) => slot.children.iter().position(|&c| c == child),
            None => None,
        };
        let Some(position) = position else {
            return;
        };
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.remove(position);
        }
        self.free_subtree(child);
    }

    /// Restore the node at `id` to the state of a freshly allocated node:
    /// every field at its default, no parent, no children.
    ///
    /// The node keeps its id and storage slot; its former children are
    /// destroyed. No-op for stale ids.
    pub fn reset_entry(&mut self, id: EntryId) {
        if !self.contains(id) {
            return;
        }
        self.detach(id);
        let children = match self.slot_mut(id) {
            Some(slot) => std::mem::take(&mut slot.children),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        if let Some(slot) = self.slot_mut(id) {
            slot.entry.reset();
        }
    }

    /// Visit `id` and every node below it in preorder, source order within
    /// each child sequence.
    pub fn walk<F>(&self, id: EntryId, mut f: F)
    where
        F: FnMut(EntryId, &Entry),
    {
        self.walk_inner(id, &mut f);
    }

    /// Number of nodes strictly below `id`.
    pub fn descendant_count(&self, id: EntryId) -> usize {
        let mut count = 0usize;
        self.walk(id, |_, _| count += 1);
        count.saturating_sub(1)
    }

    /// Field-level equality of two subtrees: entries equal at every position,
    /// with identical shape and child order.
    pub fn subtree_eq(&self, a: EntryId, b: EntryId) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Some(slot_a), Some(slot_b)) => {
                slot_a.entry == slot_b.entry
                    && slot_a.children.len() == slot_b.children.len()
                    && slot_a
                        .children
                        .iter()
                        .zip(&slot_b.children)
                        .all(|(&ca, &cb)| self.subtree_eq(ca, cb))
            }
            _ => false,
        }
    }

    fn slot(&self, id: EntryId) -> Option<&Slot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: EntryId) -> Option<&mut Slot> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Unlink `id` from its current parent, if it has one.
    fn detach(&mut self, id: EntryId) {
        let parent = match self.slot_mut(id) {
            Some(slot) => slot.parent.take(),
            None => None,
        };
        if let Some(parent) = parent {
            if let Some(slot) = self.slot_mut(parent) {
                slot.children.retain(|&c| c != id);
            }
        }
    }

    /// Duplicate the subtree at `src` into fresh, detached slots.
    fn clone_subtree(&mut self, src: EntryId) -> EntryId {
        let entry = self.entry(src).clone();
        let children = self.children_of(src).to_vec();

        let copy = self.alloc();
        if let Some(slot) = self.slot_mut(copy) {
            slot.entry = entry;
        }
        for child in children {
            let child_copy = self.clone_subtree(child);
            if let Some(slot) = self.slot_mut(copy) {
                slot.children.push(child_copy);
            }
            if let Some(slot) = self.slot_mut(child_copy) {
                slot.parent = Some(copy);
            }
        }
        copy
    }

    /// Tombstone `id` and everything below it. Slots are never reused, so
    /// stale ids stay permanently invalid.
    fn free_subtree(&mut self, id: EntryId) {
        let Some(slot) = self.slots.get_mut(id.index()).and_then(Option::take) else {
            return;
        };
        self.live -= 1;
        for child in slot.children {
            self.free_subtree(child);
        }
    }

    fn walk_inner(&self, id: EntryId, f: &mut dyn FnMut(EntryId, &Entry)) {
        let Some(slot) = self.slot(id) else {
            return;
        };
        f(id, &slot.entry);
        for &child in &slot.children {
            self.walk_inner(child, f);
        }
    }
}

impl Default for EntryTree {
    fn default() -> Self {
        Self::new()
    }
}
