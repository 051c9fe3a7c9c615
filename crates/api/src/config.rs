//! Runtime configuration for the account API.
//!
//! Everything the server needs is read once at startup into [`ApiConfig`] and
//! passed explicitly to [`crate::app::build_app`] and [`crate::server`].

use std::time::Duration;

use thiserror::Error;

pub const BASE_PATH_VAR: &str = "ACCOUNT_API_URL";
pub const BIND_ADDR_VAR: &str = "ACCOUNT_BIND_ADDR";
pub const SHUTDOWN_TIMEOUT_VAR: &str = "ACCOUNT_SHUTDOWN_TIMEOUT_SECS";
pub const MAX_BODY_BYTES_VAR: &str = "ACCOUNT_MAX_BODY_BYTES";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix every account route is mounted under (`""` means root).
    pub base_path: String,
    pub bind_addr: String,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout: Duration,
    /// Largest accepted `Content-Length`.
    pub max_body_bytes: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_path = lookup(BASE_PATH_VAR).unwrap_or_else(|| {
            tracing::warn!("{BASE_PATH_VAR} not set; mounting account routes at /");
            defaults.base_path.clone()
        });

        // Wildcards cannot be nested under; catch them before the router does.
        if base_path.contains('*') {
            return Err(ConfigError::Invalid {
                var: BASE_PATH_VAR,
                value: base_path,
            });
        }

        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or(defaults.bind_addr);

        let shutdown_timeout = match lookup(SHUTDOWN_TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(parse_number(SHUTDOWN_TIMEOUT_VAR, raw)?),
            None => defaults.shutdown_timeout,
        };

        let max_body_bytes = match lookup(MAX_BODY_BYTES_VAR) {
            Some(raw) => parse_number(MAX_BODY_BYTES_VAR, raw)?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            base_path,
            bind_addr,
            shutdown_timeout,
            max_body_bytes,
        })
    }

    /// Route prefix in the form the router nests under, or `None` for root.
    ///
    /// `"api/account/"` becomes `Some("/api/account")`; `""` and `"/"` become `None`.
    pub fn route_prefix(&self) -> Option<String> {
        let trimmed = self.base_path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(trimmed.to_string())
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}

fn parse_number(var: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value: raw })
}
