use std::{net::SocketAddr, time::Duration};

use mbtx_connect::DEFAULT_BANK_API_URL;
use mbtx_core::bank::Credentials;
use mbtx_core::errors::{Error, Result};

pub const ENV_USERNAME: &str = "MB_USERNAME";
pub const ENV_PASSWORD: &str = "MB_PASSWORD";
pub const ENV_ACCOUNT_NO: &str = "MB_ACCOUNT_NO";
pub const ENV_API_URL: &str = "MB_API_URL";
pub const ENV_LISTEN_ADDR: &str = "MB_LISTEN_ADDR";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "MB_REQUEST_TIMEOUT_MS";
pub const ENV_CORS_ALLOW_ORIGINS: &str = "MB_CORS_ALLOW_ORIGINS";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TIMEOUT_MS: u64 = 30000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub credentials: Credentials,
    pub bank_api_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::MissingConfigKey(key.to_string()))
        };
        let credentials = Credentials::new(
            required(ENV_USERNAME)?,
            required(ENV_PASSWORD)?,
            required(ENV_ACCOUNT_NO)?,
        );

        let listen_addr: SocketAddr = lookup(ENV_LISTEN_ADDR)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .map_err(|e| Error::InvalidConfigValue(format!("{}: {}", ENV_LISTEN_ADDR, e)))?;
        let bank_api_url = lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_BANK_API_URL.into());
        let cors_allow = lookup(ENV_CORS_ALLOW_ORIGINS)
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup(ENV_REQUEST_TIMEOUT_MS)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            listen_addr,
            credentials,
            bank_api_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
