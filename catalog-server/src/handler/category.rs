//! Category Handlers

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::ApiResponse;

use super::ListQueryParams;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::utils::{AppError, created, ok, ok_with_message, page};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let params = query.list_params()?;
    let result = state.catalog.list_categories(&params).await?;
    Ok(page(result))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.catalog.get_category(&id).await?;
    Ok(ok(category))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), AppError> {
    let category = state.catalog.create_category(payload).await?;
    Ok(created(category, "Category created successfully"))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.catalog.update_category(&id, payload).await?;
    Ok(ok_with_message(category, "Category updated successfully"))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.catalog.delete_category(&id).await?;
    Ok(ok_with_message(category, "Category deleted successfully"))
}
