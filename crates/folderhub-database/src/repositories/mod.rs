//! Folder store implementations.

pub mod folder;
pub mod memory;

pub use folder::FolderRepository;
pub use memory::MemoryFolderRepository;

use folderhub_core::traits::{HierarchyStore, HierarchyTransaction};
use folderhub_core::types::FolderId;
use folderhub_entity::folder::{Folder, FolderChanges};

/// The folder store contract as a trait object.
pub type FolderStore = dyn HierarchyStore<Folder, FolderId, FolderChanges>;

/// A folder store transaction as a trait object.
pub type FolderTransaction = dyn HierarchyTransaction<Folder, FolderId>;
