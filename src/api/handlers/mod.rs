//! HTTP request handlers, one thin function per service method.

mod categories;
mod orders;
mod products;
mod users;

pub use categories::category_routes;
pub use orders::order_routes;
pub use products::product_routes;
pub use users::user_routes;
