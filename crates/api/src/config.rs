//! Process configuration, read from the environment once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `CATALOG_PATH` | `./products.json` |
//! | `BIND_ADDR` | `0.0.0.0:3000` |
//! | `CATALOG_RELOAD` | `per_request` (or `once`) |

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_CATALOG_PATH: &str = "./products.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// When the catalog file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// Read the file for every request; edits show up immediately.
    #[default]
    PerRequest,
    /// Read the file at startup and share that snapshot for the process lifetime.
    Once,
}

impl FromStr for ReloadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_request" | "per-request" | "always" => Ok(ReloadPolicy::PerRequest),
            "once" | "startup" => Ok(ReloadPolicy::Once),
            other => Err(format!("unknown reload policy: {other}")),
        }
    }
}

impl core::fmt::Display for ReloadPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReloadPolicy::PerRequest => f.write_str("per_request"),
            ReloadPolicy::Once => f.write_str("once"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub catalog_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub reload: ReloadPolicy,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let bind_value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let reload = match lookup("CATALOG_RELOAD") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to {}", ReloadPolicy::default());
                ReloadPolicy::default()
            }),
            None => ReloadPolicy::default(),
        };

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            bind_addr,
            reload,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            reload: ReloadPolicy::PerRequest,
        }
    }
}
