use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::{
    database::CustomerRepository,
    models::{Customer, NationalId},
    store::StoreError,
    CustomerError, Result,
};

/// Repository double that records every call it receives
#[derive(Default)]
pub struct StubRepository {
    customer: Option<Customer>,
    fail: bool,
    lookups: Mutex<Vec<String>>,
    added: Mutex<Vec<Customer>>,
}

impl StubRepository {
    pub fn with_customer(national_id: &str) -> Self {
        Self {
            customer: Some(persisted_customer(national_id)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<Customer> {
        self.added.lock().unwrap().clone()
    }

    fn failure() -> CustomerError {
        StoreError::Unavailable("stubbed failure".into()).into()
    }
}

#[async_trait]
impl CustomerRepository for StubRepository {
    async fn get_by_national_id(&self, national_id: &NationalId) -> Result<Customer> {
        self.lookups
            .lock()
            .unwrap()
            .push(national_id.as_str().to_string());
        if self.fail {
            return Err(Self::failure());
        }
        self.customer
            .clone()
            .filter(|c| &c.national_id == national_id)
            .ok_or(CustomerError::NotFound)
    }

    async fn add(&self, customer: Customer) -> Result<Customer> {
        self.added.lock().unwrap().push(customer.clone());
        if self.fail {
            return Err(Self::failure());
        }
        Ok(Customer {
            id: "generated-id".into(),
            created_at: Utc::now(),
            ..customer
        })
    }
}

pub fn persisted_customer(national_id: &str) -> Customer {
    Customer {
        id: "4b1c1a0e-2f4e-4a53-9d53-0c6f0f6b9c11".into(),
        national_id: NationalId::parse(national_id).unwrap(),
        name: "John Doe".into(),
        email: "john@doe.com".into(),
        created_at: Utc::now(),
    }
}
