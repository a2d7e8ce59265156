//! Key-value item storage
//!
//! Items are flat maps of attribute name to [`AttributeValue`], addressed by a
//! table name and a single partition key. The customer repository is the only
//! consumer and owns the translation between items and entities.

mod attribute;
mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

pub use attribute::{AttributeValue, Item};
pub use memory::InMemoryStore;
pub use postgres::PgItemStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database request failed")]
    Database(#[from] sqlx::Error),

    #[error("failed to (de)serialize item")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Point access to items keyed by a single partition key
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns `None` when no item is stored under `key`
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError>;

    /// Writes `item` under `key`, replacing whatever was stored there
    async fn put_item(&self, table: &str, key: &str, item: Item) -> Result<(), StoreError>;
}
