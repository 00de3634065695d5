//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the repository traits for
//! dependency inversion, and every access-controlled operation takes
//! the caller's identity as an explicit argument.

mod category_service;
mod order_service;
mod product_service;
mod token_service;
mod user_service;

pub use category_service::{CategoryManager, CategoryService};
pub use order_service::{OrderManager, OrderService};
pub use product_service::{check_seller_access, ProductCatalog, ProductService};
pub use token_service::{Claims, Token, TokenService};
pub use user_service::{UserManager, UserService};
