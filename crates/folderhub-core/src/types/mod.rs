//! Core type definitions used across the FolderHub workspace.

pub mod id;

pub use id::FolderId;
