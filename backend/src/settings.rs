//! Server settings loaded via OrthoConfig.
//!
//! Every value may come from `QNA_*` environment variables, the matching
//! command-line flag, or a configuration file; unset values fall back to the
//! defaults below. `DATABASE_URL` is read separately because it is shared
//! with other PostgreSQL tooling.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::{DbTlsMode, ParseDbTlsModeError, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Raised when a configured value cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    TlsMode(#[from] ParseDbTlsModeError),
    #[error("{DATABASE_URL_ENV} must be set")]
    MissingDatabaseUrl,
}

/// Runtime settings for the HTTP server and its connection pool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QNA")]
pub struct AppSettings {
    /// Listen address, e.g. `0.0.0.0:4000`.
    pub bind_addr: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
    /// Idle connections the pool keeps warm.
    #[ortho_config(default = 2)]
    pub db_min_idle: u32,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = 30)]
    pub db_connect_timeout_secs: u64,
    /// `disable`, `verify` or `permissive`.
    pub db_tls_mode: Option<String>,
}

impl AppSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Parsed TLS mode.
    pub fn db_tls_mode(&self) -> Result<DbTlsMode, SettingsError> {
        self.db_tls_mode
            .as_deref()
            .map_or(Ok(DbTlsMode::default()), str::parse)
            .map_err(SettingsError::from)
    }

    /// Pool configuration for `database_url` with these settings applied.
    pub fn pool_config(&self, database_url: impl Into<String>) -> Result<PoolConfig, SettingsError> {
        Ok(PoolConfig::new(database_url)
            .with_max_size(self.db_max_connections)
            .with_min_idle(Some(self.db_min_idle))
            .with_connection_timeout(Duration::from_secs(self.db_connect_timeout_secs))
            .with_tls_mode(self.db_tls_mode()?))
    }
}

/// Read `DATABASE_URL`, treating an empty value as unset.
pub fn database_url_from_env() -> Result<String, SettingsError> {
    std::env::var(DATABASE_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .ok_or(SettingsError::MissingDatabaseUrl)
}
