//! Flat records -> ordered sidebar tree.
//!
//! Construction is index-then-link. Pass 1 allocates one slot per distinct id
//! and indexes it; pass 2 wires every slot to its parent by lookup. Records
//! that cannot be reached from a root afterwards (parent cycles) are cut loose
//! and promoted, then the owned tree is assembled and sorted level by level.

use crate::tree::node::{compare_siblings, NodeKind, TreeNode};
use crate::tree::record::DocumentRecord;
use crate::types::DocumentId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Why a record ended up at root level although it names a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanReason {
    /// `parent_id` does not match any record
    MissingParent,
    /// The parent chain loops back onto the record
    ParentCycle,
}

/// A record promoted to root level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub id: DocumentId,
    pub parent_id: DocumentId,
    pub reason: OrphanReason,
}

/// Result of a build: the tree plus what had to be repaired to produce it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBuild {
    pub roots: Vec<TreeNode>,
    pub orphans: Vec<Orphan>,
    /// Ids that appeared more than once; the last record with the id wins
    pub duplicate_ids: Vec<DocumentId>,
}

struct Slot<'a> {
    record: &'a DocumentRecord,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Build the sidebar tree. Never fails; see [`build_tree_with_report`].
pub fn build_tree(records: &[DocumentRecord]) -> Vec<TreeNode> {
    build_tree_with_report(records).roots
}

/// Build the sidebar tree and report orphans and duplicate ids.
pub fn build_tree_with_report(records: &[DocumentRecord]) -> TreeBuild {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut slots: Vec<Slot> = Vec::with_capacity(records.len());
    let mut duplicate_ids = Vec::new();

    // Pass 1: index
    for record in records {
        match index.get(record.id.as_str()) {
            Some(&existing) => {
                warn!(id = %record.id, "Duplicate document id, keeping the last record");
                slots[existing].record = record;
                duplicate_ids.push(record.id.clone());
            }
            None => {
                index.insert(record.id.as_str(), slots.len());
                slots.push(Slot {
                    record,
                    parent: None,
                    children: Vec::new(),
                });
            }
        }
    }

    // Pass 2: link
    let mut roots = Vec::new();
    let mut orphans = Vec::new();
    for i in 0..slots.len() {
        let record = slots[i].record;
        let Some(parent_id) = record.parent_id.as_deref() else {
            roots.push(i);
            continue;
        };
        match index.get(parent_id) {
            Some(&p) => {
                slots[i].parent = Some(p);
                slots[p].children.push(i);
            }
            None => {
                warn!(id = %record.id, parent_id, "Parent not found, promoting document to root");
                orphans.push(Orphan {
                    id: record.id.clone(),
                    parent_id: parent_id.to_string(),
                    reason: OrphanReason::MissingParent,
                });
                roots.push(i);
            }
        }
    }

    break_cycles(&mut slots, &mut roots, &mut orphans);

    let tree = assemble(&mut slots, &roots);

    debug!(
        records = records.len(),
        roots = tree.len(),
        orphans = orphans.len(),
        "Built document tree"
    );

    TreeBuild {
        roots: tree,
        orphans,
        duplicate_ids,
    }
}

/// Promote every slot not reachable from a root, first in input order.
///
/// Each slot has at most one parent, so an unreachable slot sits on a parent
/// cycle or below one. Detaching the first unreachable slot of a cycle from
/// its parent opens the cycle and makes the rest of it reachable.
fn break_cycles(slots: &mut [Slot], roots: &mut Vec<usize>, orphans: &mut Vec<Orphan>) {
    let mut reachable = vec![false; slots.len()];
    for &root in roots.iter() {
        mark_reachable(slots, root, &mut reachable);
    }

    let mut promoted = false;
    for i in 0..slots.len() {
        if reachable[i] {
            continue;
        }
        if let Some(p) = slots[i].parent.take() {
            slots[p].children.retain(|&c| c != i);
        }
        let parent_id = slots[i].record.parent_id.clone().unwrap_or_default();
        warn!(
            id = %slots[i].record.id,
            parent_id = %parent_id,
            "Parent cycle detected, promoting document to root"
        );
        orphans.push(Orphan {
            id: slots[i].record.id.clone(),
            parent_id,
            reason: OrphanReason::ParentCycle,
        });
        roots.push(i);
        mark_reachable(slots, i, &mut reachable);
        promoted = true;
    }

    // Keep roots in input order so the stable sort preserves it for ties
    if promoted {
        roots.sort_unstable();
    }
}

fn mark_reachable(slots: &[Slot], start: usize, reachable: &mut [bool]) {
    let mut stack = vec![start];
    while let Some(i) = stack.pop() {
        if reachable[i] {
            continue;
        }
        reachable[i] = true;
        stack.extend(slots[i].children.iter().copied());
    }
}

/// Materialize the linked slots into owned, sorted nodes.
///
/// Slots are visited in pre-order and built in reverse of it, so every child
/// exists before its parent. Depth costs heap, not stack.
fn assemble(slots: &mut [Slot], roots: &[usize]) -> Vec<TreeNode> {
    let mut order = Vec::with_capacity(slots.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(i) = stack.pop() {
        order.push(i);
        stack.extend(slots[i].children.iter().rev().copied());
    }

    let mut built: Vec<Option<TreeNode>> = (0..slots.len()).map(|_| None).collect();
    for &i in order.iter().rev() {
        let mut children: Vec<TreeNode> = std::mem::take(&mut slots[i].children)
            .into_iter()
            .filter_map(|c| built[c].take())
            .collect();
        children.sort_by(compare_siblings);

        let record = slots[i].record;
        built[i] = Some(TreeNode {
            id: record.id.clone(),
            title: record.title.clone(),
            kind: NodeKind::from_is_folder(record.is_folder),
            parent_id: record.parent_id.clone(),
            is_expanded: false,
            children,
        });
    }

    let mut tree: Vec<TreeNode> = roots.iter().filter_map(|&r| built[r].take()).collect();
    tree.sort_by(compare_siblings);
    tree
}
