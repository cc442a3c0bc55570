//! Size Handlers

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::ApiResponse;

use super::ListQueryParams;
use crate::core::ServerState;
use crate::db::models::{Size, SizeCreate, SizeUpdate};
use crate::utils::{AppError, created, ok, ok_with_message, page};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<Size>>>, AppError> {
    let params = query.list_params()?;
    let result = state.catalog.list_sizes(&params).await?;
    Ok(page(result))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Size>>, AppError> {
    let size = state.catalog.get_size(&id).await?;
    Ok(ok(size))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SizeCreate>,
) -> Result<(StatusCode, Json<ApiResponse<Size>>), AppError> {
    let size = state.catalog.create_size(payload).await?;
    Ok(created(size, "Size created successfully"))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SizeUpdate>,
) -> Result<Json<ApiResponse<Size>>, AppError> {
    let size = state.catalog.update_size(&id, payload).await?;
    Ok(ok_with_message(size, "Size updated successfully"))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Size>>, AppError> {
    let size = state.catalog.delete_size(&id).await?;
    Ok(ok_with_message(size, "Size deleted successfully"))
}
