//! Supplier Handlers

use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode};
use shared::ApiResponse;

use super::ListQueryParams;
use crate::core::ServerState;
use crate::db::models::{Supplier, SupplierCreate, SupplierUpdate};
use crate::utils::{AppError, created, ok, ok_with_message, page};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<Supplier>>>, AppError> {
    let params = query.list_params()?;
    let result = state.catalog.list_suppliers(&params).await?;
    Ok(page(result))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Supplier>>, AppError> {
    let supplier = state.catalog.get_supplier(&id).await?;
    Ok(ok(supplier))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SupplierCreate>,
) -> Result<(StatusCode, Json<ApiResponse<Supplier>>), AppError> {
    let supplier = state.catalog.create_supplier(payload).await?;
    Ok(created(supplier, "Supplier created successfully"))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SupplierUpdate>,
) -> Result<Json<ApiResponse<Supplier>>, AppError> {
    let supplier = state.catalog.update_supplier(&id, payload).await?;
    Ok(ok_with_message(supplier, "Supplier updated successfully"))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Supplier>>, AppError> {
    let supplier = state.catalog.delete_supplier(&id).await?;
    Ok(ok_with_message(supplier, "Supplier deleted successfully"))
}
