//! Marketplace API - A multi-tenant e-commerce backend
//!
//! REST backend exposing CRUD over products, categories, orders and
//! users on top of a document store, with role-scoped data access:
//! sellers see and mutate only their own products, admins see
//! everything. Identity is established by Argon2 password hashing and
//! HS256 JWTs, and flows through the services as an explicit caller
//! argument.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, DTOs and value objects
//! - **services**: Application use cases, authorization and token lifecycle
//! - **infra**: Infrastructure concerns (MongoDB connection, repositories)
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Caller, Password, Role, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
