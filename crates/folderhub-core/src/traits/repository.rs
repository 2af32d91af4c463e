//! Generic storage traits for self-referential hierarchies.
//!
//! The traits are generic over the row type, its identifier, and the
//! partial-update payload so that `folderhub-core` stays free of entity
//! definitions. No operation here is recursive: every call touches a single
//! row or a single level of children. Walking the hierarchy is the job of
//! the service layer.

use async_trait::async_trait;

use crate::result::AppResult;

/// A repository of rows that reference a parent row of the same type.
///
/// Implementations own uniqueness and referential integrity at the storage
/// boundary:
///
/// - `insert` fails with `Conflict` on a duplicate id and with `NotFound`
///   when the referenced parent does not exist;
/// - `delete` fails with `NotFound` when the row is absent and with
///   `HasChildren` while any row still references it.
#[async_trait]
pub trait HierarchyStore<Entity, Id, Changes>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
    Changes: Send + Sync + 'static,
{
    /// Short backend name used in logs and readiness output.
    fn provider_name(&self) -> &'static str;

    /// Insert a new row and return it as stored.
    async fn insert(&self, entity: &Entity) -> AppResult<Entity>;

    /// Fetch a row by id, failing with `NotFound` if absent.
    async fn get(&self, id: &Id) -> AppResult<Entity>;

    /// List rows whose parent is `parent_id` (`None` lists roots) in creation order.
    async fn list_children(&self, parent_id: Option<&Id>) -> AppResult<Vec<Entity>>;

    /// Same as [`list_children`](Self::list_children) with each row's direct child count.
    async fn list_children_with_counts(
        &self,
        parent_id: Option<&Id>,
    ) -> AppResult<Vec<(Entity, u64)>>;

    /// Apply a partial update, failing with `NotFound` if absent.
    async fn update(&self, id: &Id, changes: &Changes) -> AppResult<Entity>;

    /// Remove exactly one row.
    async fn delete(&self, id: &Id) -> AppResult<()>;

    /// Count rows whose parent is `parent_id`.
    async fn count_children(&self, parent_id: &Id) -> AppResult<u64>;

    /// Open a serializable transaction.
    async fn begin(&self) -> AppResult<Box<dyn HierarchyTransaction<Entity, Id>>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<()>;

    /// Release connections and flush pending state. Called once on shutdown.
    async fn close(&self);
}

/// A unit of work against a [`HierarchyStore`].
///
/// Operations observe their own writes. Nothing is visible to other callers
/// until [`commit`](Self::commit); dropping the transaction without
/// committing discards every write.
#[async_trait]
pub trait HierarchyTransaction<Entity, Id>: Send
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Insert a new row.
    async fn insert(&mut self, entity: &Entity) -> AppResult<Entity>;

    /// Fetch a row by id, failing with `NotFound` if absent.
    async fn get(&mut self, id: &Id) -> AppResult<Entity>;

    /// List rows whose parent is `parent_id` in creation order.
    async fn list_children(&mut self, parent_id: Option<&Id>) -> AppResult<Vec<Entity>>;

    /// Count rows whose parent is `parent_id`.
    async fn count_children(&mut self, parent_id: &Id) -> AppResult<u64>;

    /// Remove exactly one row.
    async fn delete(&mut self, id: &Id) -> AppResult<()>;

    /// Make every write visible atomically.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Discard every write.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}
