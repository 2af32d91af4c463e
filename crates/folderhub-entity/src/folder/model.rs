//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::FolderId;

/// Maximum folder name length, counted in Unicode code points.
pub const MAX_NAME_LENGTH: usize = 255;

/// A folder in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Build a folder row from creation data, an engine-assigned id, and a timestamp.
    pub fn new(id: FolderId, data: NewFolder, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, changes: &FolderChanges, now: DateTime<Utc>) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        self.updated_at = now;
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
    /// Optional description.
    pub description: Option<String>,
}

impl NewFolder {
    /// Creation data for a root folder.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creation data for a folder under `parent_id`.
    pub fn child(name: impl Into<String>, parent_id: FolderId) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of the mutable folder fields.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderChanges {
    /// New name.
    pub name: Option<String>,
    /// New description, or `Some(None)` to clear it.
    pub description: Option<Option<String>>,
}

impl FolderChanges {
    /// Returns `true` if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// A folder annotated with the number of its direct subfolders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    /// The folder itself.
    #[serde(flatten)]
    pub folder: Folder,
    /// Number of direct subfolders.
    pub child_count: u64,
}

impl From<(Folder, u64)> for FolderSummary {
    fn from((folder, child_count): (Folder, u64)) -> Self {
        Self {
            folder,
            child_count,
        }
    }
}

/// Validate a folder name: non-blank and at most [`MAX_NAME_LENGTH`] code points.
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Folder name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use folderhub_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("Reports").is_ok());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());

        let empty = validate_name("").unwrap_err();
        assert_eq!(empty.kind, ErrorKind::Validation);
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_name_counts_code_points() {
        // 255 three-byte characters are 765 bytes but still within the limit.
        let name = "日".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn test_apply_changes() {
        let now = Utc::now();
        let mut folder = Folder::new(
            FolderId::new(),
            NewFolder::root("Old").with_description("keep"),
            now,
        );

        folder.apply(
            &FolderChanges {
                name: Some("New".to_string()),
                description: None,
            },
            now,
        );
        assert_eq!(folder.name, "New");
        assert_eq!(folder.description.as_deref(), Some("keep"));

        folder.apply(
            &FolderChanges {
                name: None,
                description: Some(None),
            },
            now,
        );
        assert_eq!(folder.name, "New");
        assert!(folder.description.is_none());
    }

    #[test]
    fn test_summary_serializes_flat_camel_case() {
        let parent = FolderId::new();
        let folder = Folder::new(FolderId::new(), NewFolder::child("Docs", parent), Utc::now());
        let json = serde_json::to_value(FolderSummary::from((folder, 3))).expect("serialize");

        assert_eq!(json["name"], "Docs");
        assert_eq!(json["parentId"], parent.to_string());
        assert_eq!(json["childCount"], 3);
        assert!(json.get("folder").is_none());
    }
}
