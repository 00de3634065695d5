//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the document store,
//! following the Repository pattern for clean separation of concerns.
//! Filters compose conjunctively and match fields exactly; the store
//! has no notion of identity, so authorization stays in the services.

mod category_repository;
mod order_repository;
mod product_repository;
mod user_repository;

pub use category_repository::{CategoryRepository, CategoryStore, CATEGORIES_COLLECTION};
pub use order_repository::{OrderRepository, OrderStore, ORDERS_COLLECTION};
pub use product_repository::{ProductRepository, ProductStore, PRODUCTS_COLLECTION};
pub use user_repository::{UserRepository, UserStore, USERS_COLLECTION};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
