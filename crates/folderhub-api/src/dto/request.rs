//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use folderhub_entity::folder::FolderChanges;

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    pub name: String,
    /// Parent folder ID; omitted for a root folder.
    pub parent_id: Option<String>,
    /// Optional description.
    pub description: Option<String>,
}

/// Update folder request body.
///
/// An omitted `description` is left unchanged; an explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    pub name: Option<String>,
    /// New description.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
}

impl From<UpdateFolderRequest> for FolderChanges {
    fn from(req: UpdateFolderRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Query string for `DELETE /folders/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuery {
    /// Only the literal `true` selects cascade mode.
    pub force: Option<String>,
}

impl DeleteQuery {
    /// Whether the subtree should be deleted along with the folder.
    pub fn is_forced(&self) -> bool {
        self.force.as_deref() == Some("true")
    }
}

/// Marks a field as present, so `null` becomes `Some(None)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
