#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]
//! Backend entry-point: loads settings, builds the pool and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::ConnectivityProbe;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, DieselConnectivityProbe};
use backend::settings::{AppSettings, database_url_from_env};
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {err}"))
}

/// Log whether the database answers; the server starts either way.
async fn check_connectivity(pool: &DbPool) {
    match DieselConnectivityProbe::new(pool.clone()).server_time().await {
        Ok(time) => info!(%time, "database connection established"),
        Err(err) => error!(error = %err, "database connectivity check failed"),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(startup_error("failed to load .env", err));
        }
    }

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| startup_error("failed to load settings", err))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| startup_error("invalid settings", err))?;
    let database_url =
        database_url_from_env().map_err(|err| startup_error("invalid settings", err))?;
    let pool_config = settings
        .pool_config(database_url)
        .map_err(|err| startup_error("invalid settings", err))?;
    let tls_mode = pool_config.tls_mode();
    let db_pool =
        DbPool::new(pool_config).map_err(|err| startup_error("failed to build pool", err))?;

    check_connectivity(&db_pool).await;

    let config = ServerConfig::new(bind_addr, db_pool);
    info!(bind_addr = %config.bind_addr(), %tls_mode, "starting server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
