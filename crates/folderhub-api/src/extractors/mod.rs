//! Custom Axum extractors.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
pub use path::{parse_folder_id, require_folder_id};
