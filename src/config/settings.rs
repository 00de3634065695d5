//! Application settings loaded from environment variables.

use std::env;

use crate::errors::{AppError, AppResult};

use super::constants::{
    DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_MONGO_DATABASE, DEFAULT_MONGO_URI, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};

/// JWT signing configuration.
///
/// The secret is the symmetric signing key; issuer and audience are
/// embedded in every issued token and checked during validation.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_hours: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub mongo_database: String,
    pub jwt: JwtSettings,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongo_uri", &"[REDACTED]")
            .field("mongo_database", &self.mongo_database)
            .field("jwt", &self.jwt)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns `AppError::Configuration` if `JWT_SECRET` is absent outside
    /// of debug builds, or set but shorter than the security minimum.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            }
            Err(_) => {
                return Err(AppError::configuration(
                    "JWT_SECRET environment variable must be set",
                ))
            }
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            mongo_uri: env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
            mongo_database: env::var("MONGO_DATABASE")
                .unwrap_or_else(|_| DEFAULT_MONGO_DATABASE.to_string()),
            jwt: JwtSettings {
                secret,
                issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "marketplace-api".to_string()),
                audience: env::var("JWT_AUDIENCE")
                    .unwrap_or_else(|_| "marketplace-clients".to_string()),
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            },
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
