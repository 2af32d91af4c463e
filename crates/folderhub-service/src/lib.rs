//! # folderhub-service
//!
//! Hierarchy engine for FolderHub. The services enforce folder rules on top
//! of a [`FolderStore`](folderhub_database::FolderStore): name validation,
//! parent existence, depth limits, and the guarded and cascading delete
//! modes. Multi-step operations run inside a single store transaction.
//!
//! Services follow constructor injection: the store handle and hierarchy
//! limits are provided at construction time.

pub mod folder;

pub use folder::{FolderService, TreeService};
