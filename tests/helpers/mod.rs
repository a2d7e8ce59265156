#![allow(dead_code)]
mod app;
mod database;
mod reqwest;
mod stores;

pub use self::reqwest::*;
pub use app::{spawn_app, spawn_app_with_store, TestApp};
pub use database::configure_database;
pub use stores::{CountingStore, FailingStore};

use lazy_static::lazy_static;
use serde_json::{json, Value};

use customer_service::telemetry::{generate_subscriber, init_subscriber};

lazy_static! {
    /// To ensure logs are only outputted in tests when required, by default
    /// tests run with no logs being captured
    ///
    /// In order to set logs to be captured during tests run them with:
    /// `TEST_LOG=true cargo test | bunyan`
    pub static ref TRACING: () = {
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = generate_subscriber("test".into(), "debug".into(), std::io::stdout);
            init_subscriber(subscriber);
        } else {
            let subscriber = generate_subscriber("test".into(), "off".into(), std::io::sink);
            init_subscriber(subscriber);
        }
    };

    pub static ref JANE_DOE: Value = {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "nationalId": "98765432109"
        })
    };
}
