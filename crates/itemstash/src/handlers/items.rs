//! Item CRUD handlers.
//!
//! These handlers use the repository trait object for database access.
//! Inputs are plain scalar query and path parameters; malformed values are
//! rejected by the extractors' default responses.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use itemstash_core::item::Item;
use itemstash_core::storage::RepositoryError;

use crate::{
    handlers::AppError,
    models::{CreateItem, ItemMessage, UpdateItem},
    state::AppState,
};

/// A NotFound error for the given item id.
fn item_not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Item",
        id: id.to_string(),
    }
}

/// Create a new item (POST /items/).
///
/// Returns the created item, including its engine-assigned id, wrapped in
/// a confirmation envelope.
pub async fn create_item(
    State(state): State<AppState>,
    Query(payload): Query<CreateItem>,
) -> Result<Json<ItemMessage>, AppError> {
    let item = state.item_repo.create_item(&payload.into_draft()).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Created new item");

    Ok(Json(ItemMessage {
        message: "Item created successfully",
        item,
    }))
}

/// List all items (GET /items/).
///
/// Returns a JSON array of every stored item, possibly empty. There is no
/// pagination and no ordering contract.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_repo.list_items().await?;

    Ok(Json(items))
}

/// Get a single item by ID (GET /items/{item_id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .item_repo
        .get_item(item_id)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    Ok(Json(item))
}

/// Update an item by ID (PUT /items/{item_id}).
///
/// Overwrites name and description in place; the id never changes.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Query(payload): Query<UpdateItem>,
) -> Result<Json<ItemMessage>, AppError> {
    let item = state
        .item_repo
        .update_item(item_id, &payload.into_draft())
        .await?;

    tracing::info!(item_id = item.id, "Updated item");

    Ok(Json(ItemMessage {
        message: "Item updated",
        item,
    }))
}

/// Delete an item by ID (DELETE /items/{item_id}).
///
/// Removal is permanent; deleting the same id twice yields a 404 the
/// second time.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.item_repo.delete_item(item_id).await?;

    tracing::info!(item_id, "Deleted item");

    Ok(Json(
        serde_json::json!({ "message": "Item deleted successfully" }),
    ))
}
