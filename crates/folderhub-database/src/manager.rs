//! Store manager that dispatches to the configured folder store.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use folderhub_core::config::DatabaseConfig;
use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;

use crate::connection::create_pool;
use crate::migration::run_migrations;
use crate::repositories::{FolderRepository, FolderStore, MemoryFolderRepository};

/// Store manager that wraps the configured folder store.
///
/// The backend is selected at construction time based on configuration.
#[derive(Clone)]
pub struct StoreManager {
    inner: Arc<FolderStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<FolderStore> = match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL folder store");
                let pool = create_pool(config).await?;
                if config.run_migrations {
                    run_migrations(&pool).await?;
                }
                Arc::new(FolderRepository::new(pool))
            }
            "memory" => {
                info!("Initializing in-memory folder store");
                Arc::new(MemoryFolderRepository::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown database provider: '{other}'. Supported: memory, postgres"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing store (for testing).
    pub fn from_store(store: Arc<FolderStore>) -> Self {
        Self { inner: store }
    }

    /// Shared handle to the inner store.
    pub fn store(&self) -> Arc<FolderStore> {
        Arc::clone(&self.inner)
    }

    /// Name of the active backend.
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}

impl fmt::Debug for StoreManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreManager")
            .field("provider", &self.inner.provider_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use folderhub_core::error::ErrorKind;

    use super::*;

    #[tokio::test]
    async fn test_memory_provider() {
        let config = DatabaseConfig {
            provider: "memory".to_string(),
            ..DatabaseConfig::default()
        };
        let manager = StoreManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_name(), "memory");
        assert!(manager.store().health_check().await.is_ok());
        assert_eq!(format!("{manager:?}"), "StoreManager { provider: \"memory\" }");
    }

    #[tokio::test]
    async fn test_unknown_provider_is_rejected() {
        let config = DatabaseConfig {
            provider: "sqlite".to_string(),
            ..DatabaseConfig::default()
        };
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("sqlite"));
    }
}
