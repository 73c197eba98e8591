//! Sidebar tree node types and read-only queries over built trees.

use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Node kind. Declaration order is the sibling order: folders first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Folder,
    Document,
}

impl NodeKind {
    pub fn from_is_folder(is_folder: bool) -> Self {
        if is_folder {
            NodeKind::Folder
        } else {
            NodeKind::Document
        }
    }
}

/// Tree node as consumed by the sidebar renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: DocumentId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<DocumentId>,
    /// UI hint only, never persisted
    pub is_expanded: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Number of nodes in this subtree, self included.
    pub fn node_count(&self) -> usize {
        1 + count_nodes(&self.children)
    }
}

// Deep chains would otherwise recurse once per level while dropping.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Sibling order: folders before documents, then case-insensitive title.
pub fn compare_siblings(a: &TreeNode, b: &TreeNode) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

/// Total number of nodes across a forest.
pub fn count_nodes(roots: &[TreeNode]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&TreeNode> = roots.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

/// Depth-first (pre-order) lookup by id.
pub fn find_node<'a>(roots: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    let mut stack: Vec<&TreeNode> = roots.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.id == id {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Breadcrumb from a root down to `id`, both ends included.
///
/// Returns an empty vector when `id` is not in the tree.
pub fn ancestor_path<'a>(roots: &'a [TreeNode], id: &str) -> Vec<&'a TreeNode> {
    let mut path: Vec<&TreeNode> = Vec::new();
    let mut stack: Vec<(&TreeNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node);
        if node.id == id {
            return path;
        }
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    Vec::new()
}
