//! Port for checking database reachability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::define_port_error;

define_port_error! {
    /// Errors raised while probing the database.
    pub enum ConnectivityProbeError {
        /// No connection could be checked out.
        Connection { message: String } => "{message}",
        /// The probe query failed.
        Query { message: String } => "{message}",
    }
}

/// Round-trips a trivial query to confirm the database answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Current database server time.
    async fn server_time(&self) -> Result<DateTime<Utc>, ConnectivityProbeError>;
}
