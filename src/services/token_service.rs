//! Token service - Issues and validates signed identity tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{JwtSettings, MIN_JWT_SECRET_LENGTH, TOKEN_TYPE_BEARER};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Role claim, parsed back into `Role` at the transport boundary
    pub role: String,
    /// Unique token id
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issued credential returned after successful authentication.
///
/// Ephemeral; nothing here is persisted. There is no refresh-token
/// redemption flow, so `refresh_token` stays empty.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Seconds until expiry
    pub expires_in: i64,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates HS256-signed identity tokens.
///
/// A token moves Issued -> Valid -> Expired; there is no revocation
/// list, so a compromised token can only be waited out.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    expiration: Duration,
}

impl TokenService {
    /// Build the service from JWT settings.
    ///
    /// # Errors
    /// `AppError::Configuration` when the signing key is absent or below
    /// the minimum length; the caller should treat this as fatal.
    pub fn new(settings: &JwtSettings) -> AppResult<Self> {
        if settings.secret.is_empty() {
            return Err(AppError::configuration("JWT signing key is not configured"));
        }
        if settings.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "JWT signing key must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            expiration: Duration::hours(settings.expiration_hours),
        })
    }

    /// Issue a signed token carrying the user's id and role.
    pub fn issue(&self, user: &User) -> AppResult<Token> {
        let now = Utc::now();
        let expires_at = now + self.expiration;

        let claims = Claims {
            sub: user.id.clone(),
            role: user.role.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("token signing failed: {}", e)))?;

        Ok(Token {
            access_token,
            refresh_token: None,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: (expires_at - now).num_seconds(),
            issued_at: now,
            expires_at,
        })
    }

    /// Fully verify a token: signature, issuer, audience and lifetime.
    ///
    /// Used by the auth middleware; the error carries no detail about
    /// which check failed.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    /// True iff the token passes full verification right now.
    pub fn validate(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }

    /// Extract claims without re-checking issuer or audience.
    ///
    /// Signature and lifetime still apply; used for introspection.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::TokenMalformed)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Role;

    use super::*;

    fn settings() -> JwtSettings {
        JwtSettings {
            secret: "test-secret-key-of-sufficient-length!".to_string(),
            issuer: "marketplace-api".to_string(),
            audience: "marketplace-clients".to_string(),
            expiration_hours: 4,
        }
    }

    fn seller() -> User {
        let mut user = User::new(
            "alice".to_string(),
            "hash".to_string(),
            "alice@example.com".to_string(),
            Role::Seller,
        );
        user.id = "user-1".to_string();
        user
    }

    #[test]
    fn test_issue_then_validate() {
        let service = TokenService::new(&settings()).unwrap();
        let token = service.issue(&seller()).unwrap();

        assert!(service.validate(&token.access_token));
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 4 * 3600);
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_issued_claims_carry_identity() {
        let service = TokenService::new(&settings()).unwrap();
        let token = service.issue(&seller()).unwrap();
        let claims = service.decode(&token.access_token).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, "Seller");
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_unique_token_ids() {
        let service = TokenService::new(&settings()).unwrap();
        let user = seller();
        let first = service.issue(&user).unwrap();
        let second = service.issue(&user).unwrap();

        let first = service.decode(&first.access_token).unwrap();
        let second = service.decode(&second.access_token).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_expired_token_fails_validation() {
        let mut expired = settings();
        expired.expiration_hours = -1;
        let service = TokenService::new(&expired).unwrap();
        let token = service.issue(&seller()).unwrap();

        assert!(!service.validate(&token.access_token));
    }

    #[test]
    fn test_foreign_issuer_fails_validation() {
        let token = TokenService::new(&JwtSettings {
            issuer: "someone-else".to_string(),
            ..settings()
        })
        .unwrap()
        .issue(&seller())
        .unwrap();

        let service = TokenService::new(&settings()).unwrap();
        assert!(!service.validate(&token.access_token));
        // decode skips the issuer check on purpose
        assert!(service.decode(&token.access_token).is_ok());
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = TokenService::new(&settings()).unwrap();
        assert!(!service.validate("not-a-token"));
        assert!(matches!(
            service.decode("not-a-token"),
            Err(AppError::TokenMalformed)
        ));
    }

    #[test]
    fn test_missing_signing_key_is_configuration_error() {
        let result = TokenService::new(&JwtSettings {
            secret: String::new(),
            ..settings()
        });
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
