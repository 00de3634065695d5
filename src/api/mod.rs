//! HTTP layer - routes, middleware, and handlers.

pub mod handlers;
pub mod middleware;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
