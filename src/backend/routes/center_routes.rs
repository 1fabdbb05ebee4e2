// src/backend/routes/center_routes.rs

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    backend::{error::ApiError, state::AppState},
    models::CenterResponse,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/diagnostic-centers/{center_id}", get(get_center))
}

/// Public: the profile page is reachable without signing in.
pub async fn get_center(
    State(state): State<AppState>,
    Path(center_id): Path<String>,
) -> Result<Json<CenterResponse>, ApiError> {
    let store = state.store.read().await;
    let center = store
        .centers
        .get(&center_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("NOT_FOUND", "center not found".into()))?;

    Ok(Json(CenterResponse { center }))
}
