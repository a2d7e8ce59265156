use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    database::CustomerRepository,
    models::{Customer, GetByNationalIdCommand, NationalId},
    Result,
};

#[async_trait]
pub trait GetByNationalIdUseCase: Send + Sync {
    async fn execute(&self, command: GetByNationalIdCommand) -> Result<Customer>;
}

pub struct GetByNationalIdUseCaseImpl {
    repository: Arc<dyn CustomerRepository>,
}

impl GetByNationalIdUseCaseImpl {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetByNationalIdUseCase for GetByNationalIdUseCaseImpl {
    #[tracing::instrument(skip(self), fields(use_case = "get_by_national_id"))]
    async fn execute(&self, command: GetByNationalIdCommand) -> Result<Customer> {
        let national_id = NationalId::parse(&command.national_id)?;
        self.repository.get_by_national_id(&national_id).await
    }
}
