//! Result of a folder deletion.

use serde::{Deserialize, Serialize};

/// Distinguishes a single-folder delete from a cascading subtree delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// Exactly one childless folder was removed.
    Single,
    /// The folder and its whole subtree were removed.
    Cascade {
        /// Number of removed folders, including the subtree root.
        deleted: u64,
    },
}

impl DeleteOutcome {
    /// User-facing status message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Single => "Folder deleted",
            Self::Cascade { .. } => "Folder and all subfolders deleted",
        }
    }

    /// Number of removed folders.
    pub fn deleted(&self) -> u64 {
        match self {
            Self::Single => 1,
            Self::Cascade { deleted } => *deleted,
        }
    }
}
