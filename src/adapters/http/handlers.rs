use crate::core::directory::AddressDirectory;
use crate::core::{Address, AddressPayload};
use crate::utils::error::{AddressError, Result};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(super) struct ListQuery {
    postcode: Option<String>,
}

pub(super) async fn list_addresses(
    State(directory): State<Arc<AddressDirectory>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Address>>> {
    tracing::debug!("Listing addresses (postcode: {:?})", query.postcode);
    let addresses = directory.list(query.postcode.as_deref()).await?;
    Ok(Json(addresses))
}

pub(super) async fn get_address(
    State(directory): State<Arc<AddressDirectory>>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Address>> {
    let Path(id) = id.map_err(|e| rejection_to_error("id", e))?;
    Ok(Json(directory.get_by_id(id).await?))
}

pub(super) async fn create_address(
    State(directory): State<Arc<AddressDirectory>>,
    body: std::result::Result<Json<AddressPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Address>)> {
    let Json(payload) = body.map_err(|e| rejection_to_error("body", e))?;
    let address = directory.create(payload).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

pub(super) async fn update_address(
    State(directory): State<Arc<AddressDirectory>>,
    id: std::result::Result<Path<i32>, PathRejection>,
    body: std::result::Result<Json<AddressPayload>, JsonRejection>,
) -> Result<Json<Address>> {
    let Path(id) = id.map_err(|e| rejection_to_error("id", e))?;
    let Json(payload) = body.map_err(|e| rejection_to_error("body", e))?;
    Ok(Json(directory.update(id, payload).await?))
}

pub(super) async fn delete_address(
    State(directory): State<Arc<AddressDirectory>>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id.map_err(|e| rejection_to_error("id", e))?;
    directory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn health() -> &'static str {
    "OK"
}

/// 無法解析的路徑參數或請求內容一律視為 400
fn rejection_to_error(field: &str, rejection: impl std::fmt::Display) -> AddressError {
    AddressError::validation(field, rejection.to_string())
}
