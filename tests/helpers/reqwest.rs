use anyhow::Result;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use std::time::Duration;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub fn build_http_client() -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(APP_USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

pub async fn add_customer(client: &Client, url: &str, body: &Value) -> Result<Response> {
    Ok(client.post(url).json(body).send().await?)
}

pub async fn get_customer(client: &Client, url: &str, national_id: &str) -> Result<Response> {
    Ok(client
        .get(url)
        .query(&[("nationalId", national_id)])
        .send()
        .await?)
}
