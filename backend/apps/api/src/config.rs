//! Server configuration
//!
//! Loaded once from the environment at startup. A `.env` file in the working
//! directory is honoured outside of tests.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use auth::AuthConfig;

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub database_url: String,
    /// Directory served for every path outside `/api`
    pub static_dir: PathBuf,
    pub password_pepper: Option<Vec<u8>>,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_HOST", e.to_string()))?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue("PORT", e.to_string()))?,
            None => 8000,
        };

        let session_ttl_hours = match var("SESSION_TTL_HOURS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue(
                        "SESSION_TTL_HOURS",
                        "must be at least 1".to_string(),
                    ));
                }
                Ok(hours) => hours,
                Err(e) => return Err(ConfigError::InvalidValue("SESSION_TTL_HOURS", e.to_string())),
            },
            None => 168,
        };

        Ok(Self {
            bind_address: SocketAddr::new(host, port),
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite:dsa_problems.db".to_string()),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            password_pepper: var("PASSWORD_PEPPER").map(String::into_bytes),
            session_ttl: Duration::from_secs(session_ttl_hours.saturating_mul(3600)),
        })
    }

    /// Settings handed to the auth crate
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            session_ttl: self.session_ttl,
            password_pepper: self.password_pepper.clone(),
            ..AuthConfig::default()
        }
    }
}
