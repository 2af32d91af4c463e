//! Typed path parameter helpers.
//!
//! A segment that is not a well-formed UUID cannot name a stored folder,
//! so it is treated like any other unknown id.

use folderhub_core::error::AppError;
use folderhub_core::types::FolderId;

/// Parses a folder ID from a path segment.
pub fn parse_folder_id(s: &str) -> Option<FolderId> {
    s.parse().ok()
}

/// Parses a folder ID, failing with `NotFound` when it cannot exist.
pub fn require_folder_id(s: &str) -> Result<FolderId, AppError> {
    parse_folder_id(s).ok_or_else(|| AppError::not_found(format!("Folder {s} not found")))
}
