use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use customer_service::store::{InMemoryStore, Item, ItemStore, StoreError};

/// In-memory store that counts how often it is reached
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryStore,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl CountingStore {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for CountingStore {
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get_item(table, key).await
    }

    async fn put_item(&self, table: &str, key: &str, item: Item) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put_item(table, key, item).await
    }
}

pub struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn get_item(&self, _table: &str, _key: &str) -> Result<Option<Item>, StoreError> {
        Err(StoreError::Unavailable("connection reset".into()))
    }

    async fn put_item(&self, _table: &str, _key: &str, _item: Item) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection reset".into()))
    }
}
