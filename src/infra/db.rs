//! MongoDB connection handling.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::Config;
use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::repositories::USERS_COLLECTION;

/// Handle to the backing document database.
///
/// The driver's client is internally pooled and safe to share across
/// request handlers by cloning.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB using the configured URI and database name.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let inner = client.database(&config.mongo_database);
        tracing::info!(database = %config.mongo_database, "connected to MongoDB");
        Ok(Self { inner })
    }

    /// Get a typed collection handle.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection(name)
    }

    /// Connectivity check used by the health endpoint.
    pub async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Create the indexes the services rely on.
    ///
    /// Username uniqueness is enforced here; registration does not
    /// re-check it and surfaces a duplicate as a store error.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection::<User>(USERS_COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    }
}
