// ABOUTME: Configuration loading and validation for the caterd server.
// ABOUTME: Reads environment variables and refuses to start without a signing secret.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CATERD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("CATERD_JWT_SECRET is not set; refusing to start without a token signing key")]
    MissingJwtSecret,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub mongo_url: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub cors_origins: Vec<String>,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - CATERD_BIND: socket address to bind (default: 0.0.0.0:8000)
    /// - CATERD_MONGO_URL: document store connection string (default: mongodb://localhost:27017)
    /// - CATERD_DB_NAME: database name (default: catering)
    /// - CATERD_JWT_SECRET: token signing key (required)
    /// - CATERD_CORS_ORIGINS: comma-separated origin allow-list, `*` for any (default: *)
    /// - CATERD_ADMIN_USERNAME / CATERD_ADMIN_PASSWORD: seed credential (default: admin/admin123)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str =
            std::env::var("CATERD_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let mongo_url = std::env::var("CATERD_MONGO_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let db_name = std::env::var("CATERD_DB_NAME").unwrap_or_else(|_| "catering".to_string());

        // The signing key must come from configuration; there is deliberately
        // no baked-in default.
        let jwt_secret = std::env::var("CATERD_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let cors_origins = std::env::var("CATERD_CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let admin_username =
            std::env::var("CATERD_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password =
            std::env::var("CATERD_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

        Ok(Self {
            bind,
            mongo_url,
            db_name,
            jwt_secret,
            cors_origins,
            admin_username,
            admin_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutation races between parallel tests, so defaults and the
    // missing-secret rejection are checked in one sequential test.
    #[test]
    fn config_defaults_and_required_secret() {
        // SAFETY: test-only code, no other thread touches these vars
        unsafe {
            std::env::remove_var("CATERD_BIND");
            std::env::remove_var("CATERD_MONGO_URL");
            std::env::remove_var("CATERD_DB_NAME");
            std::env::remove_var("CATERD_JWT_SECRET");
            std::env::remove_var("CATERD_CORS_ORIGINS");
            std::env::remove_var("CATERD_ADMIN_USERNAME");
            std::env::remove_var("CATERD_ADMIN_PASSWORD");
        }

        let result = Config::from_env();
        assert!(result.is_err(), "should reject a missing signing secret");
        assert!(
            result.unwrap_err().to_string().contains("CATERD_JWT_SECRET"),
            "error should name the missing variable"
        );

        // SAFETY: test-only code, no other thread touches these vars
        unsafe {
            std::env::set_var("CATERD_JWT_SECRET", "test-secret");
        }

        let config = Config::from_env().unwrap();

        // SAFETY: test-only code, no other thread touches these vars
        unsafe {
            std::env::remove_var("CATERD_JWT_SECRET");
        }

        assert_eq!(config.bind, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.mongo_url, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "catering");
        assert_eq!(config.jwt_secret, "test-secret");
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "admin123");
    }
}
