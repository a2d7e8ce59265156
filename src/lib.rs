pub mod configuration;
pub mod controller;
pub mod database;
pub mod dto;
mod error;
pub mod models;
pub mod presenter;
pub mod routes;
mod startup;
pub mod store;
pub mod telemetry;
pub mod usecase;

#[cfg(test)]
mod test_helpers;

pub use configuration::get_configuration;
pub use error::{CustomerError, INVALID_FORMAT, INVALID_PARAMETER, INVALID_PAYLOAD};
pub use startup::{build_app, build_controller};

pub type Result<T, E = CustomerError> = std::result::Result<T, E>;
