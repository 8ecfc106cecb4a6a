//! Menu item API handlers
//!
//! Contains HTTP request handlers for menu item CRUD operations.

use crate::error::AppError;
use crate::menu::{ItemId, MenuItem, MenuItemPatch, MenuService, NewMenuItem};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// Parse a path parameter as a base-10 item id
///
/// Rejects non-numeric ids before any store access happens.
fn parse_id(raw: &str) -> Result<ItemId, AppError> {
    raw.parse::<ItemId>()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// GET /items - List all menu items
pub async fn list_items(
    State(service): State<Arc<MenuService>>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items = service.list()?;
    Ok(Json(items))
}

/// GET /items/:id - Get a specific menu item
pub async fn get_item(
    State(service): State<Arc<MenuService>>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id)?;
    let item = service.get(id)?;
    Ok(Json(item))
}

/// POST /items - Create a new menu item
pub async fn create_item(
    State(service): State<Arc<MenuService>>,
    Json(request): Json<NewMenuItem>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let item = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/:id - Update a menu item
pub async fn update_item(
    State(service): State<Arc<MenuService>>,
    Path(id): Path<String>,
    Json(request): Json<MenuItemPatch>,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id)?;
    let item = service.update(id, request).await?;
    Ok(Json(item))
}

/// DELETE /items/:id - Delete a menu item
pub async fn delete_item(
    State(service): State<Arc<MenuService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("Course with ID {} deleted.", id),
        status: "ok".to_string(),
    }))
}
