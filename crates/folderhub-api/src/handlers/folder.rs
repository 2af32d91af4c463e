//! Folder CRUD and tree handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use folderhub_core::error::AppError;
use folderhub_entity::folder::{Folder, FolderNode, FolderSummary, NewFolder};

use crate::dto::request::{CreateFolderRequest, DeleteQuery, UpdateFolderRequest};
use crate::dto::response::DeleteResponse;
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_folder_id, require_folder_id};
use crate::state::AppState;

/// GET /folders
pub async fn list_roots(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderSummary>>, ApiError> {
    let folders = state.folder_service.list_roots().await?;
    Ok(Json(folders))
}

/// GET /folders/{id}/subfolders
pub async fn list_subfolders(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FolderSummary>>, ApiError> {
    let Some(id) = parse_folder_id(&id) else {
        return Ok(Json(Vec::new()));
    };
    let folders = state.folder_service.list_children(&id).await?;
    Ok(Json(folders))
}

/// GET /folders/{id}/tree
pub async fn get_tree(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FolderNode>, ApiError> {
    let id = require_folder_id(&id)?;
    let tree = state.tree_service.get_tree(&id).await?;
    Ok(Json(tree))
}

/// POST /folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    let parent_id = req
        .parent_id
        .as_deref()
        .map(|raw| parse_folder_id(raw).ok_or_else(|| AppError::not_found("Parent folder not found")))
        .transpose()?;

    let folder = state
        .folder_service
        .create_folder(NewFolder {
            name: req.name,
            parent_id,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(folder)))
}

/// PATCH /folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateFolderRequest>,
) -> Result<Json<Folder>, ApiError> {
    let id = require_folder_id(&id)?;
    let folder = state.folder_service.update_folder(&id, req.into()).await?;
    Ok(Json(folder))
}

/// DELETE /folders/{id}?force=true
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = require_folder_id(&id)?;
    let outcome = state
        .folder_service
        .delete_folder(&id, query.is_forced())
        .await?;
    Ok(Json(outcome.into()))
}
