//! Response DTOs.
//!
//! Folder payloads are returned as the entity types themselves
//! (`Folder`, `FolderSummary`, `FolderNode`); only the bodies below are
//! specific to the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folderhub_entity::folder::DeleteOutcome;

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Server time.
    pub timestamp: DateTime<Utc>,
    /// Server version.
    pub version: String,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Status.
    pub status: String,
    /// Active store backend.
    pub store: String,
    /// Server time.
    pub timestamp: DateTime<Utc>,
}

/// Delete result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Human-readable summary.
    pub message: String,
    /// Number of removed folders.
    pub deleted: u64,
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            message: outcome.message().to_string(),
            deleted: outcome.deleted(),
        }
    }
}
