use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    models::{Customer, NationalId},
    store::{AttributeValue, Item, ItemStore},
    CustomerError, Result,
};

pub const CUSTOMER_TABLE: &str = "Customer";

const ID: &str = "id";
const NATIONAL_ID: &str = "nationalId";
const NAME: &str = "name";
const EMAIL: &str = "email";
const CREATED_AT: &str = "createdAt";

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get_by_national_id(&self, national_id: &NationalId) -> Result<Customer>;

    /// Persists `customer` under its national id, returning the stored record
    ///
    /// Any `id` or `created_at` on the input is replaced.
    async fn add(&self, customer: Customer) -> Result<Customer>;
}

/// Customer repository over an [`ItemStore`], partitioned by `nationalId`
pub struct CustomerDatabase {
    store: Arc<dyn ItemStore>,
    table: String,
}

impl CustomerDatabase {
    pub fn new(store: Arc<dyn ItemStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }
}

#[async_trait]
impl CustomerRepository for CustomerDatabase {
    #[tracing::instrument(skip(self), fields(repository = "customer", table = %self.table))]
    async fn get_by_national_id(&self, national_id: &NationalId) -> Result<Customer> {
        let item = self
            .store
            .get_item(&self.table, national_id.as_str())
            .await?
            .ok_or(CustomerError::NotFound)?;
        customer_from_item(&item)
    }

    #[tracing::instrument(skip(self, customer), fields(repository = "customer", table = %self.table))]
    async fn add(&self, mut customer: Customer) -> Result<Customer> {
        customer.id = Uuid::new_v4().to_string();
        customer.created_at = Utc::now();

        self.store
            .put_item(
                &self.table,
                customer.national_id.as_str(),
                customer_to_item(&customer),
            )
            .await?;
        tracing::info!(id = %customer.id, "customer stored");
        Ok(customer)
    }
}

fn customer_to_item(customer: &Customer) -> Item {
    let mut item = Item::new();
    item.insert(ID.into(), AttributeValue::s(&customer.id));
    item.insert(
        NATIONAL_ID.into(),
        AttributeValue::s(customer.national_id.as_str()),
    );
    item.insert(NAME.into(), AttributeValue::s(&customer.name));
    item.insert(EMAIL.into(), AttributeValue::s(&customer.email));
    item.insert(
        CREATED_AT.into(),
        AttributeValue::s(
            customer
                .created_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ),
    );
    item
}

fn customer_from_item(item: &Item) -> Result<Customer> {
    let created_at = DateTime::parse_from_rfc3339(string_attribute(item, CREATED_AT)?)
        .map_err(|e| CustomerError::Decode(format!("`{}` is not a timestamp: {}", CREATED_AT, e)))?
        .with_timezone(&Utc);

    Ok(Customer {
        id: string_attribute(item, ID)?.to_string(),
        national_id: national_id_attribute(item)?,
        name: string_attribute(item, NAME)?.to_string(),
        email: string_attribute(item, EMAIL)?.to_string(),
        created_at,
    })
}

fn attribute<'a>(item: &'a Item, name: &str) -> Result<&'a AttributeValue> {
    item.get(name)
        .ok_or_else(|| CustomerError::Decode(format!("missing attribute `{}`", name)))
}

fn string_attribute<'a>(item: &'a Item, name: &str) -> Result<&'a str> {
    let value = attribute(item, name)?;
    value.as_s().ok_or_else(|| {
        CustomerError::Decode(format!(
            "attribute `{}` has type {}, expected S",
            name,
            value.as_ref()
        ))
    })
}

/// Older records hold the national id as a number
fn national_id_attribute(item: &Item) -> Result<NationalId> {
    let raw = match attribute(item, NATIONAL_ID)? {
        AttributeValue::String(s) | AttributeValue::Number(s) => s,
    };
    NationalId::parse(raw).map_err(|_| {
        CustomerError::Decode(format!("attribute `{}` is not a national id", NATIONAL_ID))
    })
}
