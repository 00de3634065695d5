//! Core domain entities and value objects.

mod category;
mod identity;
mod order;
mod password;
mod product;
mod user;

pub use category::{Category, CategoryDraft};
pub use identity::Caller;
pub use order::{Address, Order, OrderDraft, OrderFilter, OrderItem, OrderQuery, OrderStatus};
pub use password::Password;
pub use product::{Product, ProductDraft, StockStatus};
pub use user::{
    ChangePasswordRequest, LoginRequest, ProfileUpdate, RegisterRequest, Role, User, UserResponse,
};
