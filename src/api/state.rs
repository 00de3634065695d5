//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{CategoryStore, Database, OrderStore, ProductStore, UserStore};
use crate::services::{
    CategoryManager, CategoryService, OrderManager, OrderService, ProductCatalog, ProductService,
    TokenService, UserManager, UserService,
};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub product_service: Arc<dyn ProductService>,
    pub order_service: Arc<dyn OrderService>,
    pub category_service: Arc<dyn CategoryService>,
    pub token_service: Arc<TokenService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire up stores and services from a database connection and config.
    ///
    /// # Errors
    /// Propagates `AppError::Configuration` from token service setup;
    /// startup should abort on it.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let token_service = Arc::new(TokenService::new(&config.jwt)?);

        let users = Arc::new(UserStore::new(&database));
        let products = Arc::new(ProductStore::new(&database));
        let orders = Arc::new(OrderStore::new(&database));
        let categories = Arc::new(CategoryStore::new(&database));

        Ok(Self {
            user_service: Arc::new(UserManager::new(users, token_service.clone())),
            product_service: Arc::new(ProductCatalog::new(products)),
            order_service: Arc::new(OrderManager::new(orders)),
            category_service: Arc::new(CategoryManager::new(categories)),
            token_service,
            database,
        })
    }
}
