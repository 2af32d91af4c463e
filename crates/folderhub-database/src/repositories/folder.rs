//! PostgreSQL folder repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool, Postgres, Transaction};
use tracing::{debug, info};

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_core::traits::{HierarchyStore, HierarchyTransaction};
use folderhub_core::types::FolderId;
use folderhub_entity::folder::{Folder, FolderChanges};

/// Repository for folder rows backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A serializable PostgreSQL transaction over the `folders` table.
pub struct PgFolderTransaction {
    tx: Transaction<'static, Postgres>,
}

#[derive(FromRow)]
struct CountedFolderRow {
    #[sqlx(flatten)]
    folder: Folder,
    child_count: i64,
}

/// Map a sqlx error to an application error, keeping constraint violations distinct.
///
/// `fk_kind` decides what a foreign key violation means for the caller: a
/// missing parent on insert, remaining children on delete.
fn map_db_error(e: sqlx::Error, context: &str, fk_kind: ErrorKind) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        match db_err.code().as_deref() {
            Some("23505") => return AppError::conflict("Folder id already exists"),
            Some("23503") => {
                let message = match fk_kind {
                    ErrorKind::HasChildren => "Folder has subfolders. Use force=true to delete.",
                    _ => "Parent folder not found",
                };
                return AppError::new(fk_kind, message);
            }
            Some("23514") => return AppError::validation("Folder name is invalid"),
            Some("40001") | Some("40P01") => {
                return AppError::conflict("Concurrent modification detected, retry the request");
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}

fn not_found(id: &FolderId) -> AppError {
    AppError::not_found(format!("Folder {id} not found"))
}

async fn insert_row<'e>(exec: impl PgExecutor<'e>, folder: &Folder) -> AppResult<Folder> {
    sqlx::query_as::<_, Folder>(
        "INSERT INTO folders (id, name, description, parent_id, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(folder.id)
    .bind(&folder.name)
    .bind(&folder.description)
    .bind(folder.parent_id)
    .bind(folder.created_at)
    .bind(folder.updated_at)
    .fetch_one(exec)
    .await
    .map_err(|e| map_db_error(e, "Failed to create folder", ErrorKind::NotFound))
}

async fn find_row<'e>(exec: impl PgExecutor<'e>, id: &FolderId) -> AppResult<Folder> {
    sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
        .bind(id)
        .fetch_optional(exec)
        .await
        .map_err(|e| map_db_error(e, "Failed to find folder", ErrorKind::Database))?
        .ok_or_else(|| not_found(id))
}

async fn find_children<'e>(
    exec: impl PgExecutor<'e>,
    parent_id: Option<&FolderId>,
) -> AppResult<Vec<Folder>> {
    let query = match parent_id {
        Some(parent_id) => sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(*parent_id),
        None => sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id IS NULL ORDER BY created_at ASC, id ASC",
        ),
    };

    query
        .fetch_all(exec)
        .await
        .map_err(|e| map_db_error(e, "Failed to list subfolders", ErrorKind::Database))
}

async fn count_child_rows<'e>(exec: impl PgExecutor<'e>, parent_id: &FolderId) -> AppResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders WHERE parent_id = $1")
        .bind(parent_id)
        .fetch_one(exec)
        .await
        .map_err(|e| map_db_error(e, "Failed to count subfolders", ErrorKind::Database))?;
    Ok(count as u64)
}

async fn delete_row<'e>(exec: impl PgExecutor<'e>, id: &FolderId) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM folders WHERE id = $1")
        .bind(id)
        .execute(exec)
        .await
        .map_err(|e| map_db_error(e, "Failed to delete folder", ErrorKind::HasChildren))?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

#[async_trait]
impl HierarchyStore<Folder, FolderId, FolderChanges> for FolderRepository {
    fn provider_name(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, folder: &Folder) -> AppResult<Folder> {
        insert_row(&self.pool, folder).await
    }

    async fn get(&self, id: &FolderId) -> AppResult<Folder> {
        find_row(&self.pool, id).await
    }

    async fn list_children(&self, parent_id: Option<&FolderId>) -> AppResult<Vec<Folder>> {
        find_children(&self.pool, parent_id).await
    }

    async fn list_children_with_counts(
        &self,
        parent_id: Option<&FolderId>,
    ) -> AppResult<Vec<(Folder, u64)>> {
        let query = match parent_id {
            Some(parent_id) => sqlx::query_as::<_, CountedFolderRow>(
                "SELECT f.*, \
                    (SELECT COUNT(*) FROM folders c WHERE c.parent_id = f.id) AS child_count \
                 FROM folders f WHERE f.parent_id = $1 ORDER BY f.created_at ASC, f.id ASC",
            )
            .bind(*parent_id),
            None => sqlx::query_as::<_, CountedFolderRow>(
                "SELECT f.*, \
                    (SELECT COUNT(*) FROM folders c WHERE c.parent_id = f.id) AS child_count \
                 FROM folders f WHERE f.parent_id IS NULL ORDER BY f.created_at ASC, f.id ASC",
            ),
        };

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list subfolders", ErrorKind::Database))?;

        Ok(rows
            .into_iter()
            .map(|row| (row.folder, row.child_count as u64))
            .collect())
    }

    async fn update(&self, id: &FolderId, changes: &FolderChanges) -> AppResult<Folder> {
        let (set_description, description) = match &changes.description {
            Some(description) => (true, description.clone()),
            None => (false, None),
        };

        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET \
                name = COALESCE($2, name), \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(set_description)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to update folder", ErrorKind::Database))?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &FolderId) -> AppResult<()> {
        delete_row(&self.pool, id).await
    }

    async fn count_children(&self, parent_id: &FolderId) -> AppResult<u64> {
        count_child_rows(&self.pool, parent_id).await
    }

    async fn begin(&self) -> AppResult<Box<dyn HierarchyTransaction<Folder, FolderId>>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction", ErrorKind::Database))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to set isolation level", ErrorKind::Database))?;

        debug!("Began serializable folder transaction");
        Ok(Box::new(PgFolderTransaction { tx }))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

#[async_trait]
impl HierarchyTransaction<Folder, FolderId> for PgFolderTransaction {
    async fn insert(&mut self, folder: &Folder) -> AppResult<Folder> {
        insert_row(&mut *self.tx, folder).await
    }

    async fn get(&mut self, id: &FolderId) -> AppResult<Folder> {
        find_row(&mut *self.tx, id).await
    }

    async fn list_children(&mut self, parent_id: Option<&FolderId>) -> AppResult<Vec<Folder>> {
        find_children(&mut *self.tx, parent_id).await
    }

    async fn count_children(&mut self, parent_id: &FolderId) -> AppResult<u64> {
        count_child_rows(&mut *self.tx, parent_id).await
    }

    async fn delete(&mut self, id: &FolderId) -> AppResult<()> {
        delete_row(&mut *self.tx, id).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit transaction", ErrorKind::Database))
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.tx
            .rollback()
            .await
            .map_err(|e| map_db_error(e, "Failed to roll back transaction", ErrorKind::Database))
    }
}
