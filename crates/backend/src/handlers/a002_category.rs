use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_category::{CategoryDefinition, CategoryDto};
use serde_json::json;

use super::error::ApiError;
use crate::domain::a002_category::CategoryError;
use crate::system::state::AppState;

/// GET /api/taxonomy/categories
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<CategoryDefinition>> {
    let store = state.categories.read().await;
    Json(store.list_all())
}

/// GET /api/taxonomy/categories/:name
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryDefinition>, ApiError> {
    let store = state.categories.read().await;
    match store.get_by_exact_name(&name) {
        Some(def) => Ok(Json(def.clone())),
        None => Err(CategoryError::CategoryNotFound(name).into()),
    }
}

/// POST /api/taxonomy/categories
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> Result<(StatusCode, Json<CategoryDefinition>), ApiError> {
    let mut store = state.categories.write().await;
    let def = store.add(dto).await?;
    Ok((StatusCode::CREATED, Json(def)))
}

/// DELETE /api/taxonomy/categories/:name
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.categories.write().await;
    store.remove(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/taxonomy/reload
pub async fn reload(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let mut store = state.categories.write().await;
    let custom = store.reload().await.map_err(ApiError::internal)?;
    Ok(Json(json!({ "custom": custom })))
}
