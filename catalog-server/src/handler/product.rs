//! Product Handlers
//!
//! Product responses are always the populated form: the raw record plus
//! resolved brand/flavor/size entities.

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::ApiResponse;

use super::ListQueryParams;
use crate::core::ServerState;
use crate::db::models::{ProductCreate, ProductFull, ProductUpdate};
use crate::utils::{AppError, created, ok, ok_with_message, page};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProductFull>>>, AppError> {
    let params = query.list_params()?;
    let refs = query.product_refs();
    let result = state.catalog.list_products(&params, &refs).await?;
    Ok(page(result))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductFull>>, AppError> {
    let product = state.catalog.get_product(&id).await?;
    Ok(ok(product))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> Result<(StatusCode, Json<ApiResponse<ProductFull>>), AppError> {
    let product = state.catalog.create_product(payload).await?;
    Ok(created(product, "Product created successfully"))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<ApiResponse<ProductFull>>, AppError> {
    let product = state.catalog.update_product(&id, payload).await?;
    Ok(ok_with_message(product, "Product updated successfully"))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductFull>>, AppError> {
    let product = state.catalog.delete_product(&id).await?;
    Ok(ok_with_message(product, "Product deleted successfully"))
}
