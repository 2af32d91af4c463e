//! Folder CRUD operations and deletion modes.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_core::types::FolderId;
use folderhub_database::FolderStore;
use folderhub_entity::folder::{
    DeleteOutcome, Folder, FolderChanges, FolderSummary, NewFolder, validate_name,
};

use super::tree::TreeService;

/// Manages folder CRUD operations.
#[derive(Clone)]
pub struct FolderService {
    /// Folder store.
    store: Arc<FolderStore>,
    /// Traversal helper sharing the same store.
    tree: Arc<TreeService>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<FolderStore>, tree: Arc<TreeService>) -> Self {
        Self { store, tree }
    }

    /// Lists root folders with their direct subfolder counts.
    pub async fn list_roots(&self) -> AppResult<Vec<FolderSummary>> {
        let rows = self.store.list_children_with_counts(None).await?;
        Ok(rows.into_iter().map(FolderSummary::from).collect())
    }

    /// Lists direct subfolders of `id`.
    ///
    /// The parent is not required to exist; an unknown id has no children.
    pub async fn list_children(&self, id: &FolderId) -> AppResult<Vec<FolderSummary>> {
        let rows = self.store.list_children_with_counts(Some(id)).await?;
        Ok(rows.into_iter().map(FolderSummary::from).collect())
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, id: &FolderId) -> AppResult<Folder> {
        self.store.get(id).await
    }

    /// Creates a new folder.
    pub async fn create_folder(&self, data: NewFolder) -> AppResult<Folder> {
        validate_name(&data.name)?;

        let folder = Folder::new(FolderId::new(), data, Utc::now());
        let mut tx = self.store.begin().await?;

        if let Some(parent_id) = &folder.parent_id {
            let parent = tx.get(parent_id).await.map_err(|e| {
                if e.is(ErrorKind::NotFound) {
                    AppError::not_found("Parent folder not found")
                } else {
                    e
                }
            })?;
            let depth = self.tree.depth_of(tx.as_mut(), &parent).await? + 1;
            self.tree.ensure_depth(depth)?;
        }

        let created = tx.insert(&folder).await?;
        tx.commit().await?;

        info!(
            folder_id = %created.id,
            parent_id = ?created.parent_id,
            "Folder created"
        );

        Ok(created)
    }

    /// Applies a partial update to a folder's name and description.
    pub async fn update_folder(&self, id: &FolderId, changes: FolderChanges) -> AppResult<Folder> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if changes.is_empty() {
            return self.store.get(id).await;
        }

        let updated = self.store.update(id, &changes).await?;

        info!(folder_id = %id, "Folder updated");

        Ok(updated)
    }

    /// Deletes a folder.
    ///
    /// Without `force`, only a folder with no subfolders can be deleted.
    /// With `force`, the folder and every descendant are removed together.
    pub async fn delete_folder(&self, id: &FolderId, force: bool) -> AppResult<DeleteOutcome> {
        let mut tx = self.store.begin().await?;
        tx.get(id).await?;

        let outcome = if force {
            let order = self.tree.collect_post_order(tx.as_mut(), id).await?;
            for folder_id in &order {
                tx.delete(folder_id).await?;
            }
            DeleteOutcome::Cascade {
                deleted: order.len() as u64,
            }
        } else {
            if tx.count_children(id).await? > 0 {
                return Err(AppError::has_children(
                    "Folder has subfolders. Use force=true to delete.",
                ));
            }
            tx.delete(id).await?;
            DeleteOutcome::Single
        };

        tx.commit().await?;

        info!(
            folder_id = %id,
            force,
            deleted = outcome.deleted(),
            "{}",
            outcome.message()
        );

        Ok(outcome)
    }
}

impl fmt::Debug for FolderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderService")
            .field("store", &self.store.provider_name())
            .field("tree", &self.tree)
            .finish()
    }
}
