//! Bearer-token middleware.
//!
//! Verifies the token when one is present and injects the resulting
//! [`Caller`] into request extensions; requests without a token proceed
//! as `Caller::Anonymous` and the services decide what that means per
//! operation.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{Caller, Role};
use crate::errors::{AppError, AppResult};

/// Resolve the caller identity for every request.
///
/// A present-but-invalid token is rejected outright; only its absence
/// yields an anonymous caller.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX));

    let caller = match bearer {
        Some(token) => {
            let claims = state.token_service.verify(token)?;
            let role = claims
                .role
                .parse::<Role>()
                .map_err(|_| AppError::Unauthorized)?;
            Caller::user(claims.sub, role)
        }
        None => Caller::Anonymous,
    };

    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}

/// Gate for catalog mutations, mirroring the seller/admin route guard.
pub fn require_seller_or_admin(caller: &Caller) -> AppResult<()> {
    match caller.role() {
        Some(Role::Admin) | Some(Role::Seller) => Ok(()),
        Some(Role::Customer) => Err(AppError::AccessDenied),
        None => Err(AppError::Unauthorized),
    }
}
