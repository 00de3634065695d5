//! User record store.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const USERS_COLLECTION: &str = "Users";

/// User persistence operations.
///
/// `insert` assigns the record id when the incoming one is blank and
/// returns it; `replace`/`delete` report whether a record was actually
/// touched.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> AppResult<String>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn replace(&self, id: &str, user: &User) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB-backed user store.
pub struct UserStore {
    collection: Collection<User>,
}

impl UserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: &User) -> AppResult<String> {
        let mut record = user.clone();
        if record.id.is_empty() {
            record.id = ObjectId::new().to_hex();
        }
        self.collection.insert_one(&record).await?;
        Ok(record.id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(Into::into)
    }

    async fn replace(&self, id: &str, user: &User) -> AppResult<bool> {
        let result = self.collection.replace_one(doc! { "_id": id }, user).await?;
        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
