mod commands;
mod customer;
mod national_id;

pub use commands::{AddCustomerCommand, GetByNationalIdCommand};
pub use customer::Customer;
pub use national_id::NationalId;
