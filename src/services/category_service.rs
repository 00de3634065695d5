//! Category service - Taxonomy CRUD.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Category, CategoryDraft};
use crate::errors::{AppResult, OptionExt};
use crate::infra::CategoryRepository;

/// Taxonomy operations. No authorization rules apply to categories.
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create(&self, draft: CategoryDraft) -> AppResult<String>;

    async fn get_all(&self, include_inactive: bool) -> AppResult<Vec<Category>>;

    async fn get_by_id(&self, id: &str) -> AppResult<Category>;

    async fn update(&self, id: &str, draft: CategoryDraft) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of CategoryService.
pub struct CategoryManager {
    store: Arc<dyn CategoryRepository>,
}

impl CategoryManager {
    pub fn new(store: Arc<dyn CategoryRepository>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn create(&self, draft: CategoryDraft) -> AppResult<String> {
        let category = draft.into_category(String::new());
        self.store.insert(&category).await
    }

    async fn get_all(&self, include_inactive: bool) -> AppResult<Vec<Category>> {
        self.store.find_all(include_inactive).await
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Category> {
        self.store.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: &str, draft: CategoryDraft) -> AppResult<bool> {
        let category = draft.into_category(id.to_string());
        self.store.replace(id, &category).await
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.store.delete(id).await
    }
}
