// src/config.rs

use email_address::EmailAddress;

use crate::modules::auth::adapter::outgoing::jwt::SessionConfig;
use crate::modules::auth::adapter::outgoing::security::HashScheme;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}

/// Everything the server reads from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub session: SessionConfig,
    pub secure_cookies: bool,
    pub public_api_url: String,
}

impl AppConfig {
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let database_url = require("DATABASE_URL")?;
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| invalid("PORT", e.to_string()))?,
            None => 8080,
        };

        let admin_email = require("ADMIN_EMAIL")?.trim().to_string();
        if !EmailAddress::is_valid(&admin_email) {
            return Err(invalid("ADMIN_EMAIL", "not a valid email address"));
        }

        let admin_password_hash = require("ADMIN_PASSWORD_HASH")?.trim().to_string();
        if HashScheme::detect(&admin_password_hash).is_none() {
            return Err(invalid(
                "ADMIN_PASSWORD_HASH",
                "expected a bcrypt ($2...) or Argon2 ($argon2...) hash",
            ));
        }

        let secret_key = require("SESSION_SECRET")?;
        if secret_key.len() < SessionConfig::MIN_SECRET_LEN {
            return Err(invalid(
                "SESSION_SECRET",
                format!("must be at least {} characters", SessionConfig::MIN_SECRET_LEN),
            ));
        }

        let ttl_secs = match get("SESSION_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| invalid("SESSION_TTL_SECS", e.to_string()))?,
            None => SessionConfig::DEFAULT_TTL_SECS,
        };
        if !(SessionConfig::MIN_TTL_SECS..=SessionConfig::MAX_TTL_SECS).contains(&ttl_secs) {
            return Err(invalid(
                "SESSION_TTL_SECS",
                format!(
                    "must be between {} and {} seconds",
                    SessionConfig::MIN_TTL_SECS,
                    SessionConfig::MAX_TTL_SECS
                ),
            ));
        }

        let issuer =
            get("SESSION_ISSUER").unwrap_or_else(|| SessionConfig::DEFAULT_ISSUER.to_string());

        let secure_cookies = match get("SESSION_COOKIE_SECURE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                invalid("SESSION_COOKIE_SECURE", format!("'{}' is not a boolean", raw))
            })?,
            None => environment == "production",
        };

        let public_api_url =
            get("PUBLIC_API_URL").unwrap_or_else(|| format!("http://{}:{}/api", host, port));
        url::Url::parse(&public_api_url).map_err(|e| invalid("PUBLIC_API_URL", e.to_string()))?;

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            admin_email,
            admin_password_hash,
            session: SessionConfig {
                secret_key,
                issuer,
                ttl_secs,
            },
            secure_cookies,
            public_api_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
