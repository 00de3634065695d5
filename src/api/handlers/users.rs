//! User and authentication handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::domain::{
    ChangePasswordRequest, LoginRequest, ProfileUpdate, RegisterRequest, UserResponse,
};
use crate::errors::{AppError, AppResult};
use crate::services::Token;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", put(update_profile))
        .route("/:id/change-password", post(change_password))
        .route("/:id", get(get_user).delete(delete_user))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = state.user_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Registration successful" })),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<Token>> {
    let token = state.user_service.authenticate(payload).await?;
    Ok(Json(token))
}

async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<Json<Value>> {
    let changed = state
        .user_service
        .change_password(&id, &payload.old_password, &payload.new_password)
        .await?;
    if !changed {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "message": "Password changed successfully" })))
}

async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<StatusCode> {
    if state.user_service.update_profile(payload).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(UserResponse::from(user)))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.user_service.delete_user(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
