//! # folderhub-database
//!
//! Folder store backends for FolderHub: a PostgreSQL repository built on
//! sqlx and an in-memory repository, both implementing the core
//! [`HierarchyStore`](folderhub_core::traits::HierarchyStore) contract,
//! plus connection pooling, migrations, and the [`StoreManager`] that
//! picks a backend from configuration.

pub mod connection;
pub mod manager;
pub mod migration;
pub mod repositories;

pub use manager::StoreManager;
pub use repositories::{FolderStore, FolderTransaction};
