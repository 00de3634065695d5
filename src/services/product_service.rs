//! Product service - Catalog CRUD with per-record ownership enforcement.
//!
//! Authorization lives here rather than in the store, which has no
//! notion of identity; every mutating or single-record read follows
//! fetch, check, act. The sequence is not transactional: a concurrent
//! delete between fetch and act shows up as the store reporting nothing
//! modified, which callers treat as not-found-at-act-time.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::domain::{Caller, Product, ProductDraft, Role};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ProductRepository;

/// The central authorization primitive.
///
/// A Seller may only touch records they own; Admin and Customer
/// callers, anonymous reads, and the owning Seller all pass. Pure
/// decision, no side effects.
pub fn check_seller_access(caller: &Caller, owner_user_id: &str) -> AppResult<()> {
    match caller {
        Caller::User {
            id,
            role: Role::Seller,
        } if id != owner_user_id => Err(AppError::AccessDenied),
        _ => Ok(()),
    }
}

/// Catalog operations, all taking the caller's identity explicitly.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a product owned by the caller; returns the assigned id.
    async fn create(&self, caller: &Caller, draft: ProductDraft) -> AppResult<String>;

    /// List the catalog; Sellers see only their own products.
    async fn get_all(&self, caller: &Caller) -> AppResult<Vec<Product>>;

    /// Fetch one product, subject to the seller access check.
    async fn get_by_id(&self, caller: &Caller, id: &str) -> AppResult<Product>;

    /// Replace a product, preserving its original owner.
    async fn update(&self, caller: &Caller, id: &str, draft: ProductDraft) -> AppResult<bool>;

    /// Delete a product, subject to the seller access check.
    async fn delete(&self, caller: &Caller, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of ProductService.
pub struct ProductCatalog {
    store: Arc<dyn ProductRepository>,
}

impl ProductCatalog {
    pub fn new(store: Arc<dyn ProductRepository>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for ProductCatalog {
    async fn create(&self, caller: &Caller, draft: ProductDraft) -> AppResult<String> {
        draft.validate()?;

        // Ownership is server-assigned; the draft carries no owner
        // field, so there is nothing for a client to spoof.
        let owner = caller.user_id().ok_or(AppError::Unauthorized)?;
        let product = draft.into_product(String::new(), owner.to_string());
        self.store.insert(&product).await
    }

    async fn get_all(&self, caller: &Caller) -> AppResult<Vec<Product>> {
        // Listing-time scoping, not a per-item access check.
        match caller {
            Caller::User {
                id,
                role: Role::Seller,
            } => self.store.find_by_owner(id).await,
            _ => self.store.find_all().await,
        }
    }

    async fn get_by_id(&self, caller: &Caller, id: &str) -> AppResult<Product> {
        let product = self.store.find_by_id(id).await?.ok_or_not_found()?;
        check_seller_access(caller, &product.owner_user_id)?;
        Ok(product)
    }

    async fn update(&self, caller: &Caller, id: &str, draft: ProductDraft) -> AppResult<bool> {
        let existing = self.store.find_by_id(id).await?.ok_or_not_found()?;

        // The check runs against the stored owner, never anything the
        // payload implies.
        check_seller_access(caller, &existing.owner_user_id)?;
        draft.validate()?;

        let updated = draft.into_product(existing.id.clone(), existing.owner_user_id.clone());
        self.store.replace(id, &updated).await
    }

    async fn delete(&self, caller: &Caller, id: &str) -> AppResult<bool> {
        let existing = self.store.find_by_id(id).await?.ok_or_not_found()?;
        check_seller_access(caller, &existing.owner_user_id)?;
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_access_matrix() {
        let owner = "S1";

        assert!(check_seller_access(&Caller::user("S1", Role::Seller), owner).is_ok());
        assert!(matches!(
            check_seller_access(&Caller::user("S2", Role::Seller), owner),
            Err(AppError::AccessDenied)
        ));
        assert!(check_seller_access(&Caller::user("A1", Role::Admin), owner).is_ok());
        assert!(check_seller_access(&Caller::user("C1", Role::Customer), owner).is_ok());
        assert!(check_seller_access(&Caller::Anonymous, owner).is_ok());
    }
}
