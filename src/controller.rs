use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    dto::{AddCustomerRequest, CustomerView},
    models::{AddCustomerCommand, GetByNationalIdCommand},
    presenter::CustomerPresenter,
    usecase::{AddCustomerUseCase, GetByNationalIdUseCase},
    Result,
};

/// Translates wire requests into use case commands and entities into views.
/// Errors are passed through untouched so the HTTP layer can classify them.
#[async_trait]
pub trait CustomerController: Send + Sync {
    async fn get_by_national_id(&self, national_id: String) -> Result<CustomerView>;
    async fn add(&self, request: AddCustomerRequest) -> Result<()>;
}

pub struct CustomerControllerImpl {
    presenter: Arc<dyn CustomerPresenter>,
    add_customer: Arc<dyn AddCustomerUseCase>,
    get_by_national_id: Arc<dyn GetByNationalIdUseCase>,
}

impl CustomerControllerImpl {
    pub fn new(
        presenter: Arc<dyn CustomerPresenter>,
        add_customer: Arc<dyn AddCustomerUseCase>,
        get_by_national_id: Arc<dyn GetByNationalIdUseCase>,
    ) -> Self {
        Self {
            presenter,
            add_customer,
            get_by_national_id,
        }
    }
}

#[async_trait]
impl CustomerController for CustomerControllerImpl {
    #[tracing::instrument(skip(self), fields(controller = "customer"))]
    async fn get_by_national_id(&self, national_id: String) -> Result<CustomerView> {
        let customer = self
            .get_by_national_id
            .execute(GetByNationalIdCommand::new(national_id))
            .await?;
        Ok(self.presenter.present(customer))
    }

    #[tracing::instrument(skip(self, request), fields(controller = "customer"))]
    async fn add(&self, request: AddCustomerRequest) -> Result<()> {
        let command = AddCustomerCommand::new(request.name, request.email, request.national_id);
        self.add_customer.execute(command).await?;
        Ok(())
    }
}
