//! Folder domain entities.

pub mod model;
pub mod outcome;
pub mod tree;

pub use model::{Folder, FolderChanges, FolderSummary, MAX_NAME_LENGTH, NewFolder, validate_name};
pub use outcome::DeleteOutcome;
pub use tree::FolderNode;
