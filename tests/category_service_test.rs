//! Category service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use marketplace_api::domain::{Category, CategoryDraft};
use marketplace_api::errors::AppError;
use marketplace_api::infra::MockCategoryRepository;
use marketplace_api::services::{CategoryManager, CategoryService};

fn category_draft(name: &str) -> CategoryDraft {
    CategoryDraft {
        name: name.to_string(),
        description: None,
        parent_category_id: None,
        subcategories: Vec::new(),
        image_path: None,
        seo_keywords: None,
        is_active: true,
    }
}

fn category(id: &str, name: &str) -> Category {
    category_draft(name).into_category(id.to_string())
}

fn service(store: MockCategoryRepository) -> CategoryManager {
    CategoryManager::new(Arc::new(store))
}

#[tokio::test]
async fn test_create_returns_the_assigned_id() {
    let mut store = MockCategoryRepository::new();
    store
        .expect_insert()
        .withf(|c: &Category| c.id.is_empty() && c.name == "Bags")
        .times(1)
        .returning(|_| Ok("cat1".to_string()));

    let id = service(store).create(category_draft("Bags")).await.unwrap();

    assert_eq!(id, "cat1");
}

#[tokio::test]
async fn test_get_all_forwards_the_inactive_flag() {
    let mut store = MockCategoryRepository::new();
    store
        .expect_find_all()
        .with(eq(false))
        .times(1)
        .returning(|_| Ok(vec![category("cat1", "Bags")]));

    let categories = service(store).get_all(false).await.unwrap();

    assert_eq!(categories.len(), 1);
}

#[tokio::test]
async fn test_get_by_id_absent_is_not_found() {
    let mut store = MockCategoryRepository::new();
    store.expect_find_by_id().returning(|_| Ok(None));

    let result = service(store).get_by_id("ghost").await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_targets_the_path_id() {
    let mut store = MockCategoryRepository::new();
    store
        .expect_replace()
        .withf(|id: &str, c: &Category| id == "cat1" && c.id == "cat1" && c.name == "Totes")
        .times(1)
        .returning(|_, _| Ok(true));

    let updated = service(store)
        .update("cat1", category_draft("Totes"))
        .await
        .unwrap();

    assert!(updated);
}

#[tokio::test]
async fn test_delete_reports_whether_a_record_was_removed() {
    let mut store = MockCategoryRepository::new();
    store.expect_delete().with(eq("cat1")).returning(|_| Ok(true));
    assert!(service(store).delete("cat1").await.unwrap());

    let mut store = MockCategoryRepository::new();
    store.expect_delete().returning(|_| Ok(false));
    assert!(!service(store).delete("ghost").await.unwrap());
}
