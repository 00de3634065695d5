//! User service - Registration, authentication and account upkeep.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::task;
use validator::Validate;

use crate::domain::{LoginRequest, Password, ProfileUpdate, RegisterRequest, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::services::{Token, TokenService};

/// A well-formed Argon2 hash that no password verifies against.
/// Verification runs against it when the username is unknown, so the
/// two authentication failures stay indistinguishable in timing as well
/// as in the returned error.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$YXV0aGRlY295c2FsdA$m5B9cbqLEqNBLPXXEZKlVPEjk5mC2y+Y0IQxJ3UhVGM";

/// User-facing account operations.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; returns the store-assigned id.
    async fn register(&self, registration: RegisterRequest) -> AppResult<String>;

    /// Authenticate and issue a signed token.
    ///
    /// Unknown username and wrong password fail identically.
    async fn authenticate(&self, login: LoginRequest) -> AppResult<Token>;

    /// Replace the password after verifying the old one.
    async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<bool>;

    /// Update profile fields of the user named in the payload.
    async fn update_profile(&self, update: ProfileUpdate) -> AppResult<bool>;

    /// Remove a user; true iff a record existed.
    async fn delete_user(&self, user_id: &str) -> AppResult<bool>;

    /// Lookup by id; absence is not an error.
    async fn get_by_id(&self, user_id: &str) -> AppResult<Option<User>>;

    /// Lookup by username; absence is not an error.
    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    store: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl UserManager {
    pub fn new(store: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }
}

/// Hash a password on the blocking pool; Argon2 is deliberately
/// expensive and must not stall the async workers.
async fn hash_blocking(plain_text: String) -> AppResult<String> {
    task::spawn_blocking(move || Password::new(&plain_text).map(Password::into_string))
        .await
        .map_err(|e| AppError::internal(format!("hashing task failed: {}", e)))?
}

/// Verify a password against a stored hash on the blocking pool.
async fn verify_blocking(hash: String, plain_text: String) -> AppResult<bool> {
    task::spawn_blocking(move || Password::from_hash(hash).verify(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("verification task failed: {}", e)))
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, registration: RegisterRequest) -> AppResult<String> {
        registration.validate()?;

        let password_hash = hash_blocking(registration.password).await?;
        let user = User::new(
            registration.username,
            password_hash,
            registration.email,
            registration.role,
        );

        // Username uniqueness is the store's constraint; a duplicate
        // surfaces as a store error rather than being re-checked here.
        let id = self.store.insert(&user).await?;
        tracing::info!(user_id = %id, "registered user");
        Ok(id)
    }

    async fn authenticate(&self, login: LoginRequest) -> AppResult<Token> {
        let user = self.store.find_by_username(&login.username).await?;

        let hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_PASSWORD_HASH.to_string(),
        };
        let password_valid = verify_blocking(hash, login.password).await?;

        match user {
            Some(ref user) if password_valid => self.tokens.issue(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<bool> {
        let mut user = self.store.find_by_id(user_id).await?.ok_or_not_found()?;

        let old_valid =
            verify_blocking(user.password_hash.clone(), old_password.to_string()).await?;
        if !old_valid {
            return Err(AppError::InvalidCredentials);
        }

        user.password_hash = hash_blocking(new_password.to_string()).await?;
        user.modified_at = Utc::now();
        self.store.replace(user_id, &user).await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> AppResult<bool> {
        let mut user = self
            .store
            .find_by_username(&update.username)
            .await?
            .ok_or_not_found()?;

        user.email = update.email;
        user.modified_at = Utc::now();
        let id = user.id.clone();
        self.store.replace(&id, &user).await
    }

    async fn delete_user(&self, user_id: &str) -> AppResult<bool> {
        self.store.delete(user_id).await
    }

    async fn get_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        self.store.find_by_id(user_id).await
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.store.find_by_username(username).await
    }
}
