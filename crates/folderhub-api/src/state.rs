//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use folderhub_core::config::AppConfig;
use folderhub_database::StoreManager;
use folderhub_service::{FolderService, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder store selected at startup
    pub store: StoreManager,
    /// Folder CRUD and deletion
    pub folder_service: Arc<FolderService>,
    /// Tree traversal
    pub tree_service: Arc<TreeService>,
}

impl AppState {
    /// Wires the services on top of an initialized store.
    pub fn new(config: AppConfig, store: StoreManager) -> Self {
        let tree_service = Arc::new(TreeService::new(store.store(), &config.hierarchy));
        let folder_service = Arc::new(FolderService::new(
            store.store(),
            Arc::clone(&tree_service),
        ));

        Self {
            config: Arc::new(config),
            store,
            folder_service,
            tree_service,
        }
    }
}
