//! Database round-trip used by the `/test` endpoint and start-up check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::QueryableByName;
use diesel::sql_query;
use diesel::sql_types::Timestamptz;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ConnectivityProbe, ConnectivityProbeError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;

#[derive(QueryableByName)]
struct ServerTimeRow {
    #[diesel(sql_type = Timestamptz)]
    now: DateTime<Utc>,
}

/// Diesel-backed implementation of the `ConnectivityProbe` port.
#[derive(Clone)]
pub struct DieselConnectivityProbe {
    pool: DbPool,
}

impl DieselConnectivityProbe {
    /// Create a new probe with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectivityProbe for DieselConnectivityProbe {
    async fn server_time(&self) -> Result<DateTime<Utc>, ConnectivityProbeError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ConnectivityProbeError::connection))?;

        let row: ServerTimeRow = sql_query("SELECT NOW() AS now")
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    "probe connectivity",
                    ConnectivityProbeError::query,
                    ConnectivityProbeError::connection,
                )
            })?;

        Ok(row.now)
    }
}
