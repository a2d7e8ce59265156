use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use super::{Item, ItemStore, StoreError};

/// Items persisted as JSONB rows keyed by `(table_name, partition_key)`
///
/// The backing table is created by the migrations in `./migrations`
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(store = "postgres"))]
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    #[tracing::instrument(skip(self), fields(store = "postgres"))]
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError> {
        let row: Option<(Json<Item>,)> = sqlx::query_as(
            r#"
            SELECT item FROM store_items WHERE table_name = $1 AND partition_key = $2
            "#,
        )
        .bind(table)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(Json(item),)| item))
    }

    #[tracing::instrument(skip(self, item), fields(store = "postgres"))]
    async fn put_item(&self, table: &str, key: &str, item: Item) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO store_items (table_name, partition_key, item)
            VALUES ($1, $2, $3)
            ON CONFLICT (table_name, partition_key) DO UPDATE SET item = EXCLUDED.item
            "#,
        )
        .bind(table)
        .bind(key)
        .bind(Json(item))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
