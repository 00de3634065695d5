//! Category handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::domain::{Category, CategoryDraft};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
struct CategoryListQuery {
    #[serde(default)]
    include_inactive: bool,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state
        .category_service
        .get_all(query.include_inactive)
        .await?;
    Ok(Json(categories))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let category = state.category_service.get_by_id(&id).await?;
    Ok(Json(category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(draft): Json<CategoryDraft>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = state.category_service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<CategoryDraft>,
) -> AppResult<StatusCode> {
    if state.category_service.update(&id, draft).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.category_service.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
