use std::net::TcpListener;
use std::sync::Arc;

use customer_service::store::{InMemoryStore, ItemStore};

use crate::helpers::TRACING;

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn ItemStore>,
}

impl TestApp {
    pub fn customer_url(&self) -> String {
        format!("{}/v1/customer", self.address)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(InMemoryStore::new())).await
}

pub async fn spawn_app_with_store(store: Arc<dyn ItemStore>) -> TestApp {
    lazy_static::initialize(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let configuration =
        customer_service::get_configuration().expect("failed to read configuration");

    let server = customer_service::build_app(
        listener,
        store.clone(),
        &configuration.store.table_name,
    )
    .expect("failed to bind address");

    let _ = tokio::spawn(server);
    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        store,
    }
}
