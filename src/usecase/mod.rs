mod add_customer;
mod get_by_national_id;

pub use add_customer::{AddCustomerUseCase, AddCustomerUseCaseImpl};
pub use get_by_national_id::{GetByNationalIdUseCase, GetByNationalIdUseCaseImpl};
