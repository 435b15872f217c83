// ABOUTME: Menu catalog handlers: the public availability-filtered views and the admin CRUD surface.
// ABOUTME: Unknown item ids map to 404; everything else is a straight pass-through to the store.

use axum::Json;
use axum::extract::{Path, State};
use caterd_core::{CategoryCount, MenuItem, MenuItemDraft, MenuItemPatch};

use crate::app_state::SharedState;
use crate::error::ApiError;

/// GET /api/menu - available items only.
pub async fn public_menu(
    State(state): State<SharedState>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.store.list_menu(true).await?))
}

/// GET /api/menu/categories - available items grouped by category.
pub async fn category_summary(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    Ok(Json(state.store.category_summary().await?))
}

/// GET /api/admin/menu - every item, available or not.
pub async fn admin_menu(
    State(state): State<SharedState>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.store.list_menu(false).await?))
}

/// POST /api/admin/menu - create from a draft, returning the stored record.
pub async fn create_item(
    State(state): State<SharedState>,
    Json(draft): Json<MenuItemDraft>,
) -> Result<Json<MenuItem>, ApiError> {
    let item = MenuItem::create(draft);
    state.store.insert_menu_item(&item).await?;
    Ok(Json(item))
}

/// PUT /api/admin/menu/{id} - partial update.
pub async fn update_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(patch): Json<MenuItemPatch>,
) -> Result<Json<MenuItem>, ApiError> {
    state
        .store
        .update_menu_item(&id, &patch)
        .await?
        .map(Json)
        .ok_or(ApiError::MenuItemNotFound)
}

/// DELETE /api/admin/menu/{id} - hard delete.
pub async fn delete_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.store.delete_menu_item(&id).await? {
        Ok(Json(
            serde_json::json!({ "message": "menu item deleted successfully" }),
        ))
    } else {
        Err(ApiError::MenuItemNotFound)
    }
}
