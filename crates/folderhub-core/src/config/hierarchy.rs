//! Hierarchy traversal limits.

use serde::{Deserialize, Serialize};

/// Bounds applied by the hierarchy engine when walking the folder graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Maximum depth of any folder below its root (a root has depth 0).
    ///
    /// Tree fetches and cascading deletes refuse to descend past this depth,
    /// and folder creation refuses to attach a child that would exceed it.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    128
}
