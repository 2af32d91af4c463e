//! Core traits defined in `folderhub-core` and implemented by other crates.

pub mod repository;

pub use repository::{HierarchyStore, HierarchyTransaction};
