//! HTTP routes

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use trackboard_common::ValidationError;
use trackboard_domain::TrackboardError;

use crate::context::AppContext;

pub mod collections;
pub mod health;
pub mod items;
pub mod pages;
pub mod summary;

/// Shared application state handed to every handler.
pub type SharedState = Arc<AppContext>;

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

impl From<TrackboardError> for ApiError {
    fn from(err: TrackboardError) -> Self {
        match err {
            TrackboardError::NotFound(msg) => Self::NotFound(msg),
            TrackboardError::InvalidInput(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/items", get(items::list_items).post(items::create_item))
        .route(
            "/api/items/{id}",
            get(items::get_item).put(items::update_item).delete(items::delete_item),
        )
        .route(
            "/api/collections/{name}",
            get(collections::select_collection).post(collections::create_record),
        )
        .route("/api/views/{page}", get(pages::render_page))
        .route("/api/summary", get(summary::dashboard_summary))
}
