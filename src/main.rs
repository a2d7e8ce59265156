use customer_service::{
    build_app,
    configuration::StoreBackend,
    get_configuration,
    store::{InMemoryStore, ItemStore, PgItemStore},
    telemetry::{generate_subscriber, init_subscriber},
};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let configuration = get_configuration().expect("failed to read configuration");

    let subscriber = generate_subscriber(
        String::from("customer-service"),
        configuration.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let store: Arc<dyn ItemStore> = match configuration.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory store, customers will not survive a restart");
            Arc::new(InMemoryStore::new())
        }
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(
                    configuration.database.connect_timeout_secs,
                ))
                .connect_lazy_with(configuration.database.with_db());
            let store = PgItemStore::new(pool);
            if configuration.store.run_migrations {
                store
                    .run_migrations()
                    .await
                    .expect("failed to provision the store table");
            }
            Arc::new(store)
        }
    };

    let address = configuration.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!(%address, "starting customer service");

    build_app(listener, store, &configuration.store.table_name)?.await
}
