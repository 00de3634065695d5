//! Caller identity.
//!
//! Identity is passed explicitly to every service call instead of being
//! read from ambient request state; the auth middleware builds a
//! [`Caller`] from verified token claims and handlers thread it down.

use crate::domain::Role;

/// The identity a request acts under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No authenticated principal; read-only endpoints decide whether
    /// that is acceptable.
    Anonymous,
    /// Verified user id and role from the request's token claims.
    User { id: String, role: Role },
}

impl Caller {
    pub fn user(id: impl Into<String>, role: Role) -> Self {
        Caller::User {
            id: id.into(),
            role,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Caller::Anonymous => None,
            Caller::User { id, .. } => Some(id),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Caller::Anonymous => None,
            Caller::User { role, .. } => Some(*role),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }

    pub fn is_seller(&self) -> bool {
        matches!(self.role(), Some(Role::Seller))
    }
}
