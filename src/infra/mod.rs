//! Infrastructure layer - External systems integration
//!
//! This module handles the document-store concerns: the MongoDB
//! connection and the per-entity repositories.

mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    CategoryRepository, CategoryStore, OrderRepository, OrderStore, ProductRepository,
    ProductStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCategoryRepository, MockOrderRepository, MockProductRepository, MockUserRepository,
};
