//! Document hierarchy for sidebar navigation.

pub mod builder;
pub mod node;
pub mod record;

pub use builder::{build_tree, build_tree_with_report, Orphan, OrphanReason, TreeBuild};
pub use node::{ancestor_path, count_nodes, find_node, NodeKind, TreeNode};
pub use record::{filter_by_type, DocumentRecord};
