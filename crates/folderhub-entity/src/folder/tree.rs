//! Folder tree structures for hierarchical display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folderhub_core::types::FolderId;

use super::model::Folder;

/// A node in a materialized folder subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Folder description.
    pub description: Option<String>,
    /// Parent folder ID.
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
    /// Child subtrees in store-listed order (empty at leaves).
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a node with the given children.
    pub fn new(folder: Folder, children: Vec<FolderNode>) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            description: folder.description,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
            children,
        }
    }

    /// Create a node without children.
    pub fn leaf(folder: Folder) -> Self {
        Self::new(folder, Vec::new())
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All folder IDs in the subtree, in pre-order.
    pub fn ids(&self) -> Vec<FolderId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ids.push(node.id);
            stack.extend(node.children.iter().rev());
        }
        ids
    }

    /// Total number of nodes in the subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.ids().len()
    }

    /// Length of the longest root-to-leaf path, counting edges.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }
}
