//! Product catalog handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde_json::{json, Value};

use crate::api::middleware::require_seller_or_admin;
use crate::api::AppState;
use crate::domain::{Caller, Product, ProductDraft};
use crate::errors::{AppError, AppResult};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

async fn list_products(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.get_all(&caller).await?;
    Ok(Json(products))
}

async fn get_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_by_id(&caller, &id).await?;
    Ok(Json(product))
}

async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(draft): Json<ProductDraft>,
) -> AppResult<(StatusCode, Json<Value>)> {
    require_seller_or_admin(&caller)?;
    let id = state.product_service.create(&caller, draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> AppResult<StatusCode> {
    require_seller_or_admin(&caller)?;
    if state.product_service.update(&caller, &id, draft).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn delete_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    require_seller_or_admin(&caller)?;
    if state.product_service.delete(&caller, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
