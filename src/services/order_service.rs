//! Order service - CRUD plus the filtered listing.
//!
//! Unlike products, order operations run no seller access check even
//! though orders carry a seller-side ownership id; see DESIGN.md before
//! changing that.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Caller, Order, OrderDraft, OrderFilter, OrderQuery, OrderStatus};
use crate::errors::{AppResult, OptionExt};
use crate::infra::OrderRepository;

/// Order operations.
///
/// Methods accept the caller's identity for parity with the product
/// service, anticipating seller scoping.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create(&self, caller: &Caller, draft: OrderDraft) -> AppResult<String>;

    async fn get_all(&self, caller: &Caller) -> AppResult<Vec<Order>>;

    async fn get_by_id(&self, caller: &Caller, id: &str) -> AppResult<Order>;

    async fn update(&self, caller: &Caller, id: &str, draft: OrderDraft) -> AppResult<bool>;

    async fn delete(&self, caller: &Caller, id: &str) -> AppResult<bool>;

    /// Conjunctive filtered listing; the status string must name a
    /// known status and the date range is half-open.
    async fn get_filtered(&self, query: OrderQuery) -> AppResult<Vec<Order>>;
}

/// Concrete implementation of OrderService.
pub struct OrderManager {
    store: Arc<dyn OrderRepository>,
}

impl OrderManager {
    pub fn new(store: Arc<dyn OrderRepository>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn create(&self, _caller: &Caller, draft: OrderDraft) -> AppResult<String> {
        let order = draft.into_order(String::new(), Utc::now());
        self.store.insert(&order).await
    }

    async fn get_all(&self, caller: &Caller) -> AppResult<Vec<Order>> {
        // TODO: scope seller listings to their own orders once the
        // ownership semantics are confirmed; today every caller sees
        // the full set.
        tracing::debug!(caller = ?caller.user_id(), "listing all orders");
        self.store.find_all().await
    }

    async fn get_by_id(&self, _caller: &Caller, id: &str) -> AppResult<Order> {
        self.store.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, _caller: &Caller, id: &str, draft: OrderDraft) -> AppResult<bool> {
        let existing = self.store.find_by_id(id).await?.ok_or_not_found()?;

        // The original order date survives the update.
        let updated = draft.into_order(existing.id.clone(), existing.order_date);
        self.store.replace(id, &updated).await
    }

    async fn delete(&self, _caller: &Caller, id: &str) -> AppResult<bool> {
        self.store.find_by_id(id).await?.ok_or_not_found()?;
        self.store.delete(id).await
    }

    async fn get_filtered(&self, query: OrderQuery) -> AppResult<Vec<Order>> {
        let status = match &query.status {
            Some(raw) => Some(raw.parse::<OrderStatus>()?),
            None => None,
        };

        let filter = OrderFilter {
            seller_id: query.seller_id,
            status,
            start_date: query.start_date,
            end_date: query.end_date,
        };
        self.store.find_filtered(&filter).await
    }
}
