//! Per-test databases on the embedded cluster.
//!
//! Each test gets a fresh database created with `postgres` (outside any
//! Diesel transaction) and migrated with the embedded Diesel migrations.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;
use super::pg_embed::test_cluster;

/// Embedded migrations from the backend/migrations directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated database that lives as long as its cluster handle.
pub struct TestDatabase {
    url: String,
    _cluster: TestCluster,
}

impl TestDatabase {
    /// Connection URL of the migrated database.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run raw SQL, e.g. to seed rows or break the schema.
    pub fn execute(&self, sql: &str) -> Result<(), String> {
        let mut client =
            Client::connect(&self.url, NoTls).map_err(|err| format_postgres_error(&err))?;
        client
            .batch_execute(sql)
            .map_err(|err| format_postgres_error(&err))
    }

    /// Run a `SELECT COUNT(*) ...` statement and return the count.
    pub fn count(&self, sql: &str) -> Result<i64, String> {
        let mut client =
            Client::connect(&self.url, NoTls).map_err(|err| format_postgres_error(&err))?;
        client
            .query_one(sql, &[])
            .map(|row| row.get(0))
            .map_err(|err| format_postgres_error(&err))
    }
}

/// Start a cluster, create a uniquely named database and migrate it.
pub fn provision_database() -> Result<TestDatabase, String> {
    let cluster = test_cluster()?;
    let name = format!("qna_test_{}", Uuid::new_v4().simple());

    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;

    let url = cluster.connection().database_url(&name);
    migrate_schema(&url)?;

    Ok(TestDatabase {
        url,
        _cluster: cluster,
    })
}

/// Run all pending Diesel migrations against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("{err:?}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err:?}"))?;
    Ok(())
}
