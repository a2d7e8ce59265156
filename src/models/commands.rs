/// Input for registering a customer, identity and timestamps are never
/// caller supplied
#[derive(Debug, Clone, PartialEq)]
pub struct AddCustomerCommand {
    pub name: String,
    pub email: String,
    pub national_id: String,
}

impl AddCustomerCommand {
    pub fn new(name: String, email: String, national_id: String) -> Self {
        Self {
            name,
            email,
            national_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetByNationalIdCommand {
    pub national_id: String,
}

impl GetByNationalIdCommand {
    pub fn new(national_id: String) -> Self {
        Self { national_id }
    }
}
