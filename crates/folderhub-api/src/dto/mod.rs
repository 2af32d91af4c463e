//! Request and response bodies.

pub mod request;
pub mod response;

pub use request::{CreateFolderRequest, DeleteQuery, UpdateFolderRequest};
pub use response::{DeleteResponse, HealthResponse, ReadinessResponse};
