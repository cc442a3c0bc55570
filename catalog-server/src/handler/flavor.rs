//! Flavor Handlers

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::ApiResponse;

use super::ListQueryParams;
use crate::core::ServerState;
use crate::db::models::{Flavor, FlavorCreate, FlavorUpdate};
use crate::utils::{AppError, created, ok, ok_with_message, page};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<Flavor>>>, AppError> {
    let params = query.list_params()?;
    let result = state.catalog.list_flavors(&params).await?;
    Ok(page(result))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Flavor>>, AppError> {
    let flavor = state.catalog.get_flavor(&id).await?;
    Ok(ok(flavor))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FlavorCreate>,
) -> Result<(StatusCode, Json<ApiResponse<Flavor>>), AppError> {
    let flavor = state.catalog.create_flavor(payload).await?;
    Ok(created(flavor, "Flavor created successfully"))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FlavorUpdate>,
) -> Result<Json<ApiResponse<Flavor>>, AppError> {
    let flavor = state.catalog.update_flavor(&id, payload).await?;
    Ok(ok_with_message(flavor, "Flavor updated successfully"))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Flavor>>, AppError> {
    let flavor = state.catalog.delete_flavor(&id).await?;
    Ok(ok_with_message(flavor, "Flavor deleted successfully"))
}
