//! TLS negotiation for pooled PostgreSQL connections.
//!
//! `diesel-async` connects without TLS by default. The verified and
//! permissive modes install a custom setup callback that dials through
//! `tokio-postgres` with a `native-tls` connector and hands the client to
//! Diesel. Whether TLS is attempted or required still follows the URL's
//! `sslmode` parameter.

use std::fmt;
use std::str::FromStr;

use diesel::result::{ConnectionError, ConnectionResult};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::ManagerConfig;
use futures_util::FutureExt as _;
use futures_util::future::BoxFuture;
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tracing::error;

/// How pooled connections negotiate TLS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DbTlsMode {
    /// Plain TCP.
    Disable,
    /// TLS with certificate and hostname validation.
    #[default]
    Verify,
    /// TLS without certificate or hostname validation.
    Permissive,
}

/// Raised when a TLS mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown database TLS mode `{0}`; expected disable, verify or permissive")]
pub struct ParseDbTlsModeError(String);

impl FromStr for DbTlsMode {
    type Err = ParseDbTlsModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "verify" => Ok(Self::Verify),
            "permissive" => Ok(Self::Permissive),
            _ => Err(ParseDbTlsModeError(s.to_owned())),
        }
    }
}

impl fmt::Display for DbTlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disable => "disable",
            Self::Verify => "verify",
            Self::Permissive => "permissive",
        };
        f.write_str(name)
    }
}

impl DbTlsMode {
    /// Manager configuration that dials connections in this mode.
    pub(crate) fn manager_config(self) -> ManagerConfig<AsyncPgConnection> {
        let mut config = ManagerConfig::default();
        match self {
            Self::Disable => {}
            Self::Verify => config.custom_setup = Box::new(establish_verified),
            Self::Permissive => config.custom_setup = Box::new(establish_permissive),
        }
        config
    }
}

fn establish_verified(url: &str) -> BoxFuture<'_, ConnectionResult<AsyncPgConnection>> {
    establish(url, TlsConnector::builder().build()).boxed()
}

fn establish_permissive(url: &str) -> BoxFuture<'_, ConnectionResult<AsyncPgConnection>> {
    let connector = TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build();
    establish(url, connector).boxed()
}

async fn establish(
    url: &str,
    connector: Result<TlsConnector, native_tls::Error>,
) -> ConnectionResult<AsyncPgConnection> {
    let connector = connector.map_err(|err| ConnectionError::BadConnection(err.to_string()))?;
    let (client, connection) = tokio_postgres::connect(url, MakeTlsConnector::new(connector))
        .await
        .map_err(|err| ConnectionError::BadConnection(err.to_string()))?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(error = %err, "postgres connection task failed");
        }
    });
    AsyncPgConnection::try_from(client).await
}
