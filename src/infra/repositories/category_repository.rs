//! Category record store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::domain::Category;
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const CATEGORIES_COLLECTION: &str = "Categories";

/// Category persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: &Category) -> AppResult<String>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Category>>;

    async fn find_all(&self, include_inactive: bool) -> AppResult<Vec<Category>>;

    async fn replace(&self, id: &str, category: &Category) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB-backed category store.
pub struct CategoryStore {
    collection: Collection<Category>,
}

impl CategoryStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CATEGORIES_COLLECTION),
        }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn insert(&self, category: &Category) -> AppResult<String> {
        let mut record = category.clone();
        if record.id.is_empty() {
            record.id = ObjectId::new().to_hex();
        }
        self.collection.insert_one(&record).await?;
        Ok(record.id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Category>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
    }

    async fn find_all(&self, include_inactive: bool) -> AppResult<Vec<Category>> {
        let filter = if include_inactive {
            doc! {}
        } else {
            doc! { "is_active": true }
        };
        let cursor = self.collection.find(filter).await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn replace(&self, id: &str, category: &Category) -> AppResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, category)
            .await?;
        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
