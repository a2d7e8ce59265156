use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::time::Duration;
use uuid::Uuid;

use customer_service::{configuration::DatabaseSettings, store::PgItemStore};

/// Creates a fresh, migrated database named after a random uuid
///
/// Returns `None` when no Postgres server is reachable with the configured
/// settings, so suites depending on it can be skipped on machines without one.
/// Set `REQUIRE_DATABASE` to turn that into a failure instead.
pub async fn configure_database(config: &mut DatabaseSettings) -> Option<(PgPool, PgItemStore)> {
    config.database_name = Uuid::new_v4().to_string();

    let timeout = Duration::from_secs(config.connect_timeout_secs);
    let connection = tokio::time::timeout(timeout, PgConnection::connect_with(&config.without_db()))
        .await
        .map_err(|_| "timed out".to_string())
        .and_then(|result| result.map_err(|e| e.to_string()));
    let mut connection = match connection {
        Ok(connection) => connection,
        Err(e) if std::env::var("REQUIRE_DATABASE").is_err() => {
            eprintln!("skipping: postgres unavailable ({})", e);
            return None;
        }
        Err(e) => panic!("failed to connect to database: {}", e),
    };
    connection
        .execute(&*format!(r#"CREATE DATABASE "{}";"#, config.database_name))
        .await
        .expect("failed to create database");

    let pool = PgPool::connect_with(config.with_db())
        .await
        .expect("failed to connect to database");
    let store = PgItemStore::new(pool.clone());
    store
        .run_migrations()
        .await
        .expect("failed to run database migrations");
    Some((pool, store))
}
