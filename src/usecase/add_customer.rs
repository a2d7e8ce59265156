use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    database::CustomerRepository,
    models::{AddCustomerCommand, Customer, NationalId},
    Result,
};

#[async_trait]
pub trait AddCustomerUseCase: Send + Sync {
    async fn execute(&self, command: AddCustomerCommand) -> Result<Customer>;
}

pub struct AddCustomerUseCaseImpl {
    repository: Arc<dyn CustomerRepository>,
}

impl AddCustomerUseCaseImpl {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddCustomerUseCase for AddCustomerUseCaseImpl {
    #[tracing::instrument(skip(self, command), fields(use_case = "add_customer"))]
    async fn execute(&self, command: AddCustomerCommand) -> Result<Customer> {
        let national_id = NationalId::parse(&command.national_id)?;
        let customer = Customer::unsaved(national_id, command.name, command.email);
        self.repository.add(customer).await
    }
}
