//! Process settings loaded via OrthoConfig.
//!
//! Values come from `TILL_*` environment variables, an optional config file
//! and CLI flags, in ortho_config's usual precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Settings controlling the HTTP server and its database.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TILL")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; fixtures are served when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_pool_size: Option<u32>,
    /// File holding the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Allow a throwaway session key when the key file is unreadable.
    pub session_allow_ephemeral: Option<bool>,
    /// Mark the session cookie `Secure`; on unless explicitly disabled.
    pub cookie_secure: Option<bool>,
}

/// Raised when a setting cannot be interpreted.
#[derive(Debug, thiserror::Error)]
#[error("invalid bind address {value:?}: {source}")]
pub struct InvalidBindAddr {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

impl ServerSettings {
    /// Configured bind address, defaulting to all interfaces on 8080.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidBindAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| InvalidBindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    pub fn db_pool_size(&self) -> u32 {
        self.db_pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }

    pub fn session_allow_ephemeral(&self) -> bool {
        self.session_allow_ephemeral.unwrap_or(false)
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }
}
