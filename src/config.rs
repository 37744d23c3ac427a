//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ORDERS_BASE_URL` - Prefix of the `url` fields in responses (default: http://localhost:8000)
//! - `ORDERS_ACTOR_BUFFER` - Channel capacity of each actor (default: 32)
//! - `ORDERS_ENFORCE_OWNERSHIP` - Restrict order reads and finalization to the owner
//!   (default: true; accepts true/false/1/0/yes/no)

use crate::service::OwnershipPolicy;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_ACTOR_BUFFER: &str = "32";
const DEFAULT_ENFORCE_OWNERSHIP: &str = "true";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersConfig {
    /// Public base URL, without a trailing slash
    pub base_url: String,
    /// Capacity of every actor's request channel
    pub actor_buffer: usize,
    pub ownership: OwnershipPolicy,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            actor_buffer: 32,
            ownership: OwnershipPolicy::Enforced,
        }
    }
}

impl OrdersConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let base_url = parse_base_url(&get_or_default("ORDERS_BASE_URL", DEFAULT_BASE_URL))?;
        let actor_buffer = get_or_default("ORDERS_ACTOR_BUFFER", DEFAULT_ACTOR_BUFFER)
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_ACTOR_BUFFER".to_string(), e.to_string()))
            .and_then(|n| {
                if n == 0 {
                    Err(ConfigError::InvalidEnvVar(
                        "ORDERS_ACTOR_BUFFER".to_string(),
                        "must be greater than zero".to_string(),
                    ))
                } else {
                    Ok(n)
                }
            })?;
        let enforce = parse_bool(
            "ORDERS_ENFORCE_OWNERSHIP",
            &get_or_default("ORDERS_ENFORCE_OWNERSHIP", DEFAULT_ENFORCE_OWNERSHIP),
        )?;

        Ok(Self {
            base_url,
            actor_buffer,
            ownership: if enforce {
                OwnershipPolicy::Enforced
            } else {
                OwnershipPolicy::Unrestricted
            },
        })
    }
}

fn parse_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar(
            "ORDERS_BASE_URL".to_string(),
            format!("expected an http(s) URL, got {value:?}"),
        ));
    }
    Ok(trimmed.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
