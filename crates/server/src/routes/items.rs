//! Items CRUD routes
//!
//! The minimal in-memory items service: sequential integer ids, partial
//! updates, "Item not found" on missing ids.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use trackboard_core::{Item, ItemUpdate, NewItem};

use super::{ApiError, SharedState};

pub async fn list_items(State(ctx): State<SharedState>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(ctx.items.list().await?))
}

pub async fn get_item(
    State(ctx): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(ctx.items.get(id).await?))
}

pub async fn create_item(
    State(ctx): State<SharedState>,
    Json(body): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let created = ctx.items.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_item(
    State(ctx): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<ItemUpdate>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(ctx.items.update(id, body).await?))
}

pub async fn delete_item(
    State(ctx): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ctx.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
