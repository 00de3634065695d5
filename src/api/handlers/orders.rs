//! Order handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::domain::{Caller, Order, OrderDraft, OrderQuery};
use crate::errors::{AppError, AppResult};

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/filter", get(filter_orders))
        .route(
            "/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

async fn list_orders(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.get_all(&caller).await?;
    Ok(Json(orders))
}

async fn filter_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.get_filtered(query).await?;
    Ok(Json(orders))
}

async fn get_order(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.order_service.get_by_id(&caller, &id).await?;
    Ok(Json(order))
}

async fn create_order(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(draft): Json<OrderDraft>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = state.order_service.create(&caller, draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_order(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    Json(draft): Json<OrderDraft>,
) -> AppResult<StatusCode> {
    if state.order_service.update(&caller, &id, draft).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn delete_order(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.order_service.delete(&caller, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
