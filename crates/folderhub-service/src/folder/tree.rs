//! Folder tree building and subtree traversal.
//!
//! Every walk uses an explicit queue or stack, so arbitrarily deep
//! hierarchies never grow the call stack. Walks are bounded by the
//! configured maximum depth and track visited ids to detect cycles.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use folderhub_core::config::HierarchyConfig;
use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::FolderId;
use folderhub_database::{FolderStore, FolderTransaction};
use folderhub_entity::folder::{Folder, FolderNode};

/// Builds folder trees and walks subtrees.
#[derive(Clone)]
pub struct TreeService {
    /// Folder store.
    store: Arc<FolderStore>,
    /// Deepest level a folder may sit at; roots are level 0.
    max_depth: usize,
}

/// Pending entry of the post-order walk.
struct Frame {
    id: FolderId,
    depth: usize,
    expanded: bool,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(store: Arc<FolderStore>, config: &HierarchyConfig) -> Self {
        Self {
            store,
            max_depth: config.max_depth,
        }
    }

    /// Builds the complete subtree rooted at `id` from one consistent snapshot.
    pub async fn get_tree(&self, id: &FolderId) -> AppResult<FolderNode> {
        let mut tx = self.store.begin().await?;
        let root = tx.get(id).await?;

        // Breadth-first: `folders[i]` is discovered before any of its children.
        let mut folders = vec![root];
        let mut depths = vec![0usize];
        let mut child_slots: Vec<Vec<usize>> = vec![Vec::new()];
        let mut visited = HashSet::from([*id]);
        let mut queue = VecDeque::from([0usize]);

        while let Some(index) = queue.pop_front() {
            let parent_id = folders[index].id;
            let depth = depths[index] + 1;
            for child in tx.list_children(Some(&parent_id)).await? {
                self.check_step(&mut visited, &child.id, depth)?;
                let slot = folders.len();
                folders.push(child);
                depths.push(depth);
                child_slots.push(Vec::new());
                child_slots[index].push(slot);
                queue.push_back(slot);
            }
        }

        tx.rollback().await?;
        debug!(folder_id = %id, nodes = folders.len(), "Fetched folder tree");

        assemble(folders, child_slots)
    }

    /// Lists the subtree rooted at `root` with every child before its parent.
    ///
    /// Children are visited in store-listed order and `root` comes last, so
    /// deleting ids in the returned order never removes a folder that still
    /// has children.
    pub async fn collect_post_order(
        &self,
        tx: &mut FolderTransaction,
        root: &FolderId,
    ) -> AppResult<Vec<FolderId>> {
        let mut order = Vec::new();
        let mut visited = HashSet::from([*root]);
        let mut stack = vec![Frame {
            id: *root,
            depth: 0,
            expanded: false,
        }];

        while let Some(frame) = stack.pop() {
            if frame.expanded {
                order.push(frame.id);
                continue;
            }

            let children = tx.list_children(Some(&frame.id)).await?;
            let depth = frame.depth + 1;
            stack.push(Frame {
                expanded: true,
                ..frame
            });
            // Reversed so the first listed child is popped first.
            for child in children.iter().rev() {
                self.check_step(&mut visited, &child.id, depth)?;
                stack.push(Frame {
                    id: child.id,
                    depth,
                    expanded: false,
                });
            }
        }

        debug!(folder_id = %root, nodes = order.len(), "Collected subtree for deletion");
        Ok(order)
    }

    /// Number of ancestors above `folder`.
    pub async fn depth_of(&self, tx: &mut FolderTransaction, folder: &Folder) -> AppResult<usize> {
        let mut visited = HashSet::from([folder.id]);
        let mut depth = 0;
        let mut next = folder.parent_id;

        while let Some(parent_id) = next {
            depth += 1;
            self.check_step(&mut visited, &parent_id, depth)?;
            next = tx.get(&parent_id).await?.parent_id;
        }

        Ok(depth)
    }

    /// Fails if a folder at `depth` would exceed the configured limit.
    pub fn ensure_depth(&self, depth: usize) -> AppResult<()> {
        if depth > self.max_depth {
            return Err(AppError::validation(format!(
                "Maximum folder depth of {} exceeded",
                self.max_depth
            )));
        }
        Ok(())
    }

    fn check_step(
        &self,
        visited: &mut HashSet<FolderId>,
        id: &FolderId,
        depth: usize,
    ) -> AppResult<()> {
        self.ensure_depth(depth)?;
        if !visited.insert(*id) {
            return Err(AppError::internal(format!(
                "Cycle detected in folder hierarchy at {id}"
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for TreeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeService")
            .field("store", &self.store.provider_name())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// Turns breadth-first discovery order into nested nodes.
///
/// Children always sit at higher indices than their parent, so walking the
/// list backwards finishes every child before the parent that owns it.
fn assemble(folders: Vec<Folder>, child_slots: Vec<Vec<usize>>) -> AppResult<FolderNode> {
    let mut nodes: Vec<Option<FolderNode>> = Vec::with_capacity(folders.len());
    nodes.resize_with(folders.len(), || None);

    for (index, folder) in folders.into_iter().enumerate().rev() {
        let children = child_slots[index]
            .iter()
            .filter_map(|&slot| nodes[slot].take())
            .collect();
        nodes[index] = Some(FolderNode::new(folder, children));
    }

    nodes
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| AppError::internal("Folder tree has no root"))
}
