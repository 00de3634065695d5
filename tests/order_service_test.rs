//! Order service unit tests: filtered listing semantics and CRUD.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockall::predicate::eq;

use marketplace_api::domain::{
    Address, Caller, Order, OrderDraft, OrderFilter, OrderItem, OrderQuery, OrderStatus, Role,
};
use marketplace_api::errors::AppError;
use marketplace_api::infra::MockOrderRepository;
use marketplace_api::services::{OrderManager, OrderService};

fn address() -> Address {
    Address {
        street: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
        country: "US".to_string(),
    }
}

fn order_draft(seller: &str) -> OrderDraft {
    OrderDraft {
        customer_id: "c1".to_string(),
        order_ownership_id: seller.to_string(),
        order_items: vec![OrderItem {
            product_id: "p1".to_string(),
            product_name: "Bag".to_string(),
            quantity: 2,
            unit_price: "19.99".parse().unwrap(),
        }],
        total_price: "39.98".parse().unwrap(),
        shipping_address: address(),
        status: OrderStatus::Pending,
    }
}

fn order(id: &str, seller: &str, date: DateTime<Utc>) -> Order {
    order_draft(seller).into_order(id.to_string(), date)
}

fn service(store: MockOrderRepository) -> OrderManager {
    OrderManager::new(Arc::new(store))
}

fn customer() -> Caller {
    Caller::user("c1", Role::Customer)
}

#[tokio::test]
async fn test_get_filtered_builds_a_conjunctive_filter() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

    let mut store = MockOrderRepository::new();
    store
        .expect_find_filtered()
        .withf(move |filter: &OrderFilter| {
            filter.seller_id.as_deref() == Some("S1")
                && filter.status == Some(OrderStatus::Pending)
                && filter.start_date == Some(start)
                && filter.end_date == Some(end)
        })
        .times(1)
        .returning(move |_| Ok(vec![order("o1", "S1", start)]));

    let orders = service(store)
        .get_filtered(OrderQuery {
            seller_id: Some("S1".to_string()),
            status: Some("Pending".to_string()),
            start_date: Some(start),
            end_date: Some(end),
        })
        .await
        .unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_ownership_id, "S1");
}

#[tokio::test]
async fn test_get_filtered_without_parameters_imposes_no_constraint() {
    let mut store = MockOrderRepository::new();
    store
        .expect_find_filtered()
        .withf(|filter: &OrderFilter| *filter == OrderFilter::default())
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let orders = service(store).get_filtered(OrderQuery::default()).await;

    assert!(orders.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_filtered_rejects_an_unknown_status() {
    // No store expectation: an invalid filter must fail before querying.
    let store = MockOrderRepository::new();

    let result = service(store)
        .get_filtered(OrderQuery {
            status: Some("Refunded".to_string()),
            ..OrderQuery::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_create_returns_the_assigned_id() {
    let mut store = MockOrderRepository::new();
    store
        .expect_insert()
        .withf(|o: &Order| o.id.is_empty() && o.order_ownership_id == "S1")
        .times(1)
        .returning(|_| Ok("o1".to_string()));

    let id = service(store)
        .create(&customer(), order_draft("S1"))
        .await
        .unwrap();

    assert_eq!(id, "o1");
}

#[tokio::test]
async fn test_get_by_id_absent_is_not_found() {
    let mut store = MockOrderRepository::new();
    store.expect_find_by_id().returning(|_| Ok(None));

    let result = service(store).get_by_id(&customer(), "ghost").await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_no_seller_check_applies_to_order_reads() {
    // Orders deliberately skip the seller access check products enforce.
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let mut store = MockOrderRepository::new();
    store
        .expect_find_by_id()
        .with(eq("o1"))
        .returning(move |_| Ok(Some(order("o1", "S1", date))));

    let other_seller = Caller::user("S2", Role::Seller);
    let fetched = service(store).get_by_id(&other_seller, "o1").await.unwrap();

    assert_eq!(fetched.order_ownership_id, "S1");
}

#[tokio::test]
async fn test_update_preserves_the_original_order_date() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let mut store = MockOrderRepository::new();
    store
        .expect_find_by_id()
        .with(eq("o1"))
        .returning(move |_| Ok(Some(order("o1", "S1", date))));
    store
        .expect_replace()
        .withf(move |id: &str, o: &Order| {
            id == "o1" && o.order_date == date && o.status == OrderStatus::Delivered
        })
        .times(1)
        .returning(|_, _| Ok(true));

    let mut draft = order_draft("S1");
    draft.status = OrderStatus::Delivered;
    let updated = service(store).update(&customer(), "o1", draft).await.unwrap();

    assert!(updated);
}

#[tokio::test]
async fn test_update_absent_is_not_found() {
    let mut store = MockOrderRepository::new();
    store.expect_find_by_id().returning(|_| Ok(None));

    let result = service(store)
        .update(&customer(), "ghost", order_draft("S1"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_reports_the_store_outcome() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let mut store = MockOrderRepository::new();
    store
        .expect_find_by_id()
        .returning(move |_| Ok(Some(order("o1", "S1", date))));
    store
        .expect_delete()
        .with(eq("o1"))
        .times(1)
        .returning(|_| Ok(true));

    assert!(service(store).delete(&customer(), "o1").await.unwrap());
}

#[tokio::test]
async fn test_get_all_is_unscoped_for_every_role() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    for caller in [
        customer(),
        Caller::user("S2", Role::Seller),
        Caller::user("admin-id", Role::Admin),
    ] {
        let mut store = MockOrderRepository::new();
        store.expect_find_all().times(1).returning(move || {
            Ok(vec![order("o1", "S1", date), order("o2", "S2", date)])
        });

        let orders = service(store).get_all(&caller).await.unwrap();
        assert_eq!(orders.len(), 2);
    }
}
