use crate::{dto::CustomerView, models::Customer};

pub trait CustomerPresenter: Send + Sync {
    fn present(&self, customer: Customer) -> CustomerView;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerPresenterImpl;

impl CustomerPresenter for CustomerPresenterImpl {
    fn present(&self, customer: Customer) -> CustomerView {
        CustomerView {
            id: customer.id,
            national_id: customer.national_id.as_str().to_string(),
            name: customer.name,
            email: customer.email,
            created_at: customer.created_at,
        }
    }
}
