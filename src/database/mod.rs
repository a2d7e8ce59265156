mod customer;

pub use customer::{CustomerDatabase, CustomerRepository, CUSTOMER_TABLE};
