//! HTTP middleware.

mod auth;

pub use auth::{identity_middleware, require_seller_or_admin};
