use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{Item, ItemStore, StoreError};

/// Process-local store, contents are lost on shutdown
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<(String, String), Item>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    #[tracing::instrument(skip(self), fields(store = "memory"))]
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items.get(&(table.to_string(), key.to_string())).cloned())
    }

    #[tracing::instrument(skip(self, item), fields(store = "memory"))]
    async fn put_item(&self, table: &str, key: &str, item: Item) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.insert((table.to_string(), key.to_string()), item);
        Ok(())
    }
}
