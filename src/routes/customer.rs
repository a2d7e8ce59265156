use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    controller::CustomerController,
    dto::{AddCustomerRequest, MessageResponse},
    error::{INVALID_PARAMETER, INVALID_PAYLOAD},
    CustomerError,
};

pub const CUSTOMER_PATH: &str = "/v1/customer";
pub const CUSTOMER_CREATED: &str = "Customer created successfully";

#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    #[serde(rename = "nationalId", alias = "cpf")]
    national_id: Option<String>,
}

/// Mounts the customer endpoints under [`CUSTOMER_PATH`]
pub fn customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .service(
            web::resource(CUSTOMER_PATH)
                .route(web::get().to(get_customer))
                .route(web::post().to(add_customer)),
        );
}

/// Looks a customer up by the `nationalId` query parameter
///
/// Only presence is checked here, the format of the identifier is validated
/// further down so both endpoints share one rule.
#[tracing::instrument(name = "get_customer", skip(controller, query))]
pub async fn get_customer(
    controller: web::Data<dyn CustomerController>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, CustomerError> {
    let national_id = query
        .into_inner()
        .national_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| CustomerError::validation(INVALID_PARAMETER))?;

    let view = controller.get_by_national_id(national_id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[tracing::instrument(name = "add_customer", skip(controller, body))]
pub async fn add_customer(
    controller: web::Data<dyn CustomerController>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomerError> {
    let request = decode_add_request(&body)?;
    controller.add(request).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(CUSTOMER_CREATED)))
}

/// Only a JSON object is a valid body, derived `Deserialize` would otherwise
/// also accept the fields as an array
fn decode_add_request(body: &[u8]) -> Result<AddCustomerRequest, CustomerError> {
    match serde_json::from_slice(body)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(CustomerError::validation(INVALID_PAYLOAD)),
    }
}

fn query_error(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(err = ?err, "failed to parse customer query");
    CustomerError::validation(INVALID_PARAMETER).into()
}
