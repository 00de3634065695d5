//! Order record store, including the conjunctive filtered listing.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::Collection;

use crate::domain::{Order, OrderFilter};
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const ORDERS_COLLECTION: &str = "Orders";

/// Order persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: &Order) -> AppResult<String>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>>;

    async fn find_all(&self) -> AppResult<Vec<Order>>;

    async fn find_filtered(&self, filter: &OrderFilter) -> AppResult<Vec<Order>>;

    async fn replace(&self, id: &str, order: &Order) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB-backed order store.
pub struct OrderStore {
    collection: Collection<Order>,
}

impl OrderStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ORDERS_COLLECTION),
        }
    }
}

/// Build the query document for a filtered listing.
///
/// Present fields compose conjunctively; the date range is a half-open
/// interval, `$gte` on the start and `$lt` on the end.
fn filter_document(filter: &OrderFilter) -> Document {
    let mut query = doc! {};
    if let Some(seller_id) = &filter.seller_id {
        query.insert("order_ownership_id", seller_id);
    }
    if let Some(status) = filter.status {
        query.insert("status", status.as_str());
    }
    let mut range = doc! {};
    if let Some(start) = filter.start_date {
        range.insert("$gte", Bson::DateTime(DateTime::from_chrono(start)));
    }
    if let Some(end) = filter.end_date {
        range.insert("$lt", Bson::DateTime(DateTime::from_chrono(end)));
    }
    if !range.is_empty() {
        query.insert("order_date", range);
    }
    query
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn insert(&self, order: &Order) -> AppResult<String> {
        let mut record = order.clone();
        if record.id.is_empty() {
            record.id = ObjectId::new().to_hex();
        }
        self.collection.insert_one(&record).await?;
        Ok(record.id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Order>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn find_filtered(&self, filter: &OrderFilter) -> AppResult<Vec<Order>> {
        let cursor = self.collection.find(filter_document(filter)).await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn replace(&self, id: &str, order: &Order) -> AppResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, order)
            .await?;
        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::domain::OrderStatus;

    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(filter_document(&OrderFilter::default()).is_empty());
    }

    #[test]
    fn test_filter_composes_conjunctively() {
        let filter = OrderFilter {
            seller_id: Some("S1".to_string()),
            status: Some(OrderStatus::Pending),
            start_date: None,
            end_date: None,
        };
        let query = filter_document(&filter);
        assert_eq!(query.get_str("order_ownership_id").unwrap(), "S1");
        assert_eq!(query.get_str("status").unwrap(), "Pending");
        assert!(!query.contains_key("order_date"));
    }

    #[test]
    fn test_date_range_is_half_open() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let filter = OrderFilter {
            start_date: Some(start),
            end_date: Some(end),
            ..OrderFilter::default()
        };
        let query = filter_document(&filter);
        let range = query.get_document("order_date").unwrap();
        assert_eq!(
            range.get("$gte"),
            Some(&Bson::DateTime(DateTime::from_chrono(start)))
        );
        assert_eq!(
            range.get("$lt"),
            Some(&Bson::DateTime(DateTime::from_chrono(end)))
        );
    }

    #[test]
    fn test_open_ended_range_keeps_single_bound() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let filter = OrderFilter {
            start_date: Some(start),
            ..OrderFilter::default()
        };
        let range = filter_document(&filter);
        let range = range.get_document("order_date").unwrap();
        assert!(range.contains_key("$gte"));
        assert!(!range.contains_key("$lt"));
    }
}
