//! In-memory folder repository.
//!
//! Rows live in insertion order behind a single async mutex. A transaction
//! takes ownership of the mutex guard for its whole lifetime, so
//! transactions are fully serialized. Reads go straight to the guarded
//! table; the first write takes a private copy, and commit publishes it.
//! An uncommitted transaction leaves no trace.
//!
//! Lookups are linear scans and a writing transaction copies the table, so
//! this backend suits development and tests rather than large trees.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::traits::{HierarchyStore, HierarchyTransaction};
use folderhub_core::types::FolderId;
use folderhub_entity::folder::{Folder, FolderChanges};

/// Folder table kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFolderRepository {
    table: Arc<Mutex<MemoryTable>>,
}

/// Insertion-ordered folder rows.
#[derive(Debug, Clone, Default)]
struct MemoryTable {
    rows: Vec<Folder>,
}

/// A transaction holding exclusive access to a [`MemoryFolderRepository`].
pub struct MemoryFolderTransaction {
    guard: OwnedMutexGuard<MemoryTable>,
    /// Private copy of the table, taken on the first write.
    working: Option<MemoryTable>,
}

fn not_found(id: &FolderId) -> AppError {
    AppError::not_found(format!("Folder {id} not found"))
}

impl MemoryTable {
    fn position(&self, id: &FolderId) -> Option<usize> {
        self.rows.iter().position(|f| f.id == *id)
    }

    fn get(&self, id: &FolderId) -> AppResult<Folder> {
        self.rows
            .iter()
            .find(|f| f.id == *id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn children(&self, parent_id: Option<&FolderId>) -> impl Iterator<Item = &Folder> {
        let parent_id = parent_id.copied();
        self.rows.iter().filter(move |f| f.parent_id == parent_id)
    }

    fn count_children(&self, parent_id: &FolderId) -> u64 {
        self.children(Some(parent_id)).count() as u64
    }

    fn insert(&mut self, folder: &Folder) -> AppResult<Folder> {
        if self.position(&folder.id).is_some() {
            return Err(AppError::conflict("Folder id already exists"));
        }
        if let Some(parent_id) = &folder.parent_id {
            if self.position(parent_id).is_none() {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }
        self.rows.push(folder.clone());
        Ok(folder.clone())
    }

    fn update(&mut self, id: &FolderId, changes: &FolderChanges) -> AppResult<Folder> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let folder = &mut self.rows[index];
        folder.apply(changes, Utc::now());
        Ok(folder.clone())
    }

    fn delete(&mut self, id: &FolderId) -> AppResult<()> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        if self.count_children(id) > 0 {
            return Err(AppError::has_children(
                "Folder has subfolders. Use force=true to delete.",
            ));
        }
        self.rows.remove(index);
        Ok(())
    }
}

impl MemoryFolderTransaction {
    fn new(guard: OwnedMutexGuard<MemoryTable>) -> Self {
        Self {
            guard,
            working: None,
        }
    }

    fn view(&self) -> &MemoryTable {
        self.working.as_ref().unwrap_or(&*self.guard)
    }

    fn view_mut(&mut self) -> &mut MemoryTable {
        let guard = &self.guard;
        self.working.get_or_insert_with(|| MemoryTable::clone(guard))
    }
}

impl MemoryFolderRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored folders.
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    /// Returns `true` if no folders are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl HierarchyStore<Folder, FolderId, FolderChanges> for MemoryFolderRepository {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, folder: &Folder) -> AppResult<Folder> {
        self.table.lock().await.insert(folder)
    }

    async fn get(&self, id: &FolderId) -> AppResult<Folder> {
        self.table.lock().await.get(id)
    }

    async fn list_children(&self, parent_id: Option<&FolderId>) -> AppResult<Vec<Folder>> {
        let table = self.table.lock().await;
        Ok(table.children(parent_id).cloned().collect())
    }

    async fn list_children_with_counts(
        &self,
        parent_id: Option<&FolderId>,
    ) -> AppResult<Vec<(Folder, u64)>> {
        let table = self.table.lock().await;
        Ok(table
            .children(parent_id)
            .map(|f| (f.clone(), table.count_children(&f.id)))
            .collect())
    }

    async fn update(&self, id: &FolderId, changes: &FolderChanges) -> AppResult<Folder> {
        self.table.lock().await.update(id, changes)
    }

    async fn delete(&self, id: &FolderId) -> AppResult<()> {
        self.table.lock().await.delete(id)
    }

    async fn count_children(&self, parent_id: &FolderId) -> AppResult<u64> {
        Ok(self.table.lock().await.count_children(parent_id))
    }

    async fn begin(&self) -> AppResult<Box<dyn HierarchyTransaction<Folder, FolderId>>> {
        let guard = Arc::clone(&self.table).lock_owned().await;
        debug!(rows = guard.rows.len(), "Began in-memory folder transaction");
        Ok(Box::new(MemoryFolderTransaction::new(guard)))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    async fn close(&self) {
        let rows = self.len().await;
        info!(rows, "In-memory folder store closed");
    }
}

#[async_trait]
impl HierarchyTransaction<Folder, FolderId> for MemoryFolderTransaction {
    async fn insert(&mut self, folder: &Folder) -> AppResult<Folder> {
        self.view_mut().insert(folder)
    }

    async fn get(&mut self, id: &FolderId) -> AppResult<Folder> {
        self.view().get(id)
    }

    async fn list_children(&mut self, parent_id: Option<&FolderId>) -> AppResult<Vec<Folder>> {
        Ok(self.view().children(parent_id).cloned().collect())
    }

    async fn count_children(&mut self, parent_id: &FolderId) -> AppResult<u64> {
        Ok(self.view().count_children(parent_id))
    }

    async fn delete(&mut self, id: &FolderId) -> AppResult<()> {
        self.view_mut().delete(id)
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let Self { mut guard, working } = *self;
        if let Some(working) = working {
            *guard = working;
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}
