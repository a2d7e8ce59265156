use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

pub const INVALID_PARAMETER: &str = "Invalid CPF parameter";
pub const INVALID_FORMAT: &str = "Invalid CPF format";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

#[derive(Debug, Error)]
pub enum CustomerError {
    /// Caller supplied input that is missing or malformed
    #[error("{0}")]
    Validation(String),

    #[error("customer not found")]
    NotFound,

    #[error("failed to access the customer store")]
    Store(#[from] StoreError),

    /// The detail is logged, never sent to the caller
    #[error("failed to decode stored customer")]
    Decode(String),
}

impl CustomerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for CustomerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            match self {
                Self::Store(source) => error!(err = ?source, "customer store request failed"),
                Self::Decode(detail) => error!(%detail, "stored customer could not be decoded"),
                other => error!(err = ?other, "customer request failed"),
            }
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// The only JSON decoded from the wire is the add request, so any failure to
/// deserialize is the caller's fault
impl From<serde_json::Error> for CustomerError {
    fn from(e: serde_json::Error) -> CustomerError {
        warn!(err = ?e, category = ?e.classify(), "JSON Serde error occurred");
        CustomerError::validation(INVALID_PAYLOAD)
    }
}
