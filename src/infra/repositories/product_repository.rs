//! Product record store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::domain::Product;
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const PRODUCTS_COLLECTION: &str = "Products";

/// Product persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: &Product) -> AppResult<String>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>>;

    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// All products owned by the given user; backs the seller-scoped listing.
    async fn find_by_owner(&self, owner_user_id: &str) -> AppResult<Vec<Product>>;

    async fn replace(&self, id: &str, product: &Product) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB-backed product store.
pub struct ProductStore {
    collection: Collection<Product>,
}

impl ProductStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PRODUCTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn insert(&self, product: &Product) -> AppResult<String> {
        let mut record = product.clone();
        if record.id.is_empty() {
            record.id = ObjectId::new().to_hex();
        }
        self.collection.insert_one(&record).await?;
        Ok(record.id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn find_by_owner(&self, owner_user_id: &str) -> AppResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(doc! { "owner_user_id": owner_user_id })
            .await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn replace(&self, id: &str, product: &Product) -> AppResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, product)
            .await?;
        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
