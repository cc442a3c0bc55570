//! Brand Handlers

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::ApiResponse;

use super::ListQueryParams;
use crate::core::ServerState;
use crate::db::models::{Brand, BrandCreate, BrandUpdate};
use crate::utils::{AppError, created, ok, ok_with_message, page};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<Brand>>>, AppError> {
    let params = query.list_params()?;
    let result = state.catalog.list_brands(&params).await?;
    Ok(page(result))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Brand>>, AppError> {
    let brand = state.catalog.get_brand(&id).await?;
    Ok(ok(brand))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BrandCreate>,
) -> Result<(StatusCode, Json<ApiResponse<Brand>>), AppError> {
    let brand = state.catalog.create_brand(payload).await?;
    Ok(created(brand, "Brand created successfully"))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BrandUpdate>,
) -> Result<Json<ApiResponse<Brand>>, AppError> {
    let brand = state.catalog.update_brand(&id, payload).await?;
    Ok(ok_with_message(brand, "Brand updated successfully"))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Brand>>, AppError> {
    let brand = state.catalog.delete_brand(&id).await?;
    Ok(ok_with_message(brand, "Brand deleted successfully"))
}
