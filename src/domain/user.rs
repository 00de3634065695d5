//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// User roles enumeration.
///
/// A closed set; role strings inside token claims are parsed back into
/// this type at the transport boundary, so unknown roles fail early
/// instead of silently comparing unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Seller,
    Customer,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Seller => "Seller",
            Role::Customer => "Customer",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Seller" => Ok(Role::Seller),
            "Customer" => Ok(Role::Customer),
            other => Err(AppError::invalid_argument(format!(
                "unknown role `{}`",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity.
///
/// The id is store-assigned and opaque. The password hash is persisted
/// with the record but must never reach API clients; responses go
/// through [`UserResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user; the id is assigned by the store on insert.
    pub fn new(username: String, password_hash: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            username,
            password_hash,
            email,
            role,
            is_active: true,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
    pub username: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
    pub role: Role,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Profile update request; the username identifies the target record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
}

/// User response (safe to return to clients, no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

/// Password strength rule: minimum length plus one uppercase, one
/// lowercase, one digit and one special character.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let failure = if password.len() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 6 characters long")
    } else if !password.chars().any(|c| c.is_uppercase()) {
        Some("Password must contain at least one uppercase letter")
    } else if !password.chars().any(|c| c.is_lowercase()) {
        Some("Password must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number")
    } else if password.chars().all(|c| c.is_alphanumeric()) {
        Some("Password must contain at least one special character")
    } else {
        None
    };

    match failure {
        Some(message) => {
            let mut error = ValidationError::new("password_strength");
            error.message = Some(message.into());
            Err(error)
        }
        None => Ok(()),
    }
}
