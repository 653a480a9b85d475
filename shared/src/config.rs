use std::str::FromStr;
use std::time::Duration;

use genpet_atoms::generation::OPENAI_API_BASE;
use genpet_atoms::notification::{DeliveryMode, DISCORD_API_BASE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Secrets and endpoints, read once at cold start and handed to every
/// component through `AppState`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub discord_application_id: String,
    /// Hex-encoded Ed25519 public key from the developer portal
    pub discord_public_key: String,
    pub discord_token: String,
    pub discord_api_base: String,
    pub delivery_mode: DeliveryMode,
    pub queue_url: String,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let delivery_mode = match lookup("DISCORD_DELIVERY_MODE") {
            Some(raw) => raw.parse::<DeliveryMode>().map_err(|reason| ConfigError::Invalid {
                name: "DISCORD_DELIVERY_MODE",
                reason,
            })?,
            None => DeliveryMode::default(),
        };

        let max_attempts: u32 = parse_or("FULFILLMENT_MAX_ATTEMPTS", &lookup, 1)?;
        let retry_delay_ms: u64 = parse_or("FULFILLMENT_RETRY_DELAY_MS", &lookup, 500)?;

        Ok(Config {
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_api_base: lookup("OPENAI_API_BASE").unwrap_or_else(|| OPENAI_API_BASE.to_string()),
            discord_application_id: required("DISCORD_APPLICATION_ID")?,
            discord_public_key: required("DISCORD_PUBLIC_KEY")?,
            discord_token: required("DISCORD_TOKEN")?,
            discord_api_base: lookup("DISCORD_API_BASE")
                .unwrap_or_else(|| DISCORD_API_BASE.to_string()),
            delivery_mode,
            queue_url: required("DISCORD_MESSAGES_QUEUE_URL")?,
            max_attempts,
            retry_delay: Duration::from_millis(retry_delay_ms),
        })
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("expected a non-negative integer, got {:?}", raw),
        }),
        None => Ok(default),
    }
}
