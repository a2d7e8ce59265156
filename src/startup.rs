use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::{
    controller::{CustomerController, CustomerControllerImpl},
    database::{CustomerDatabase, CustomerRepository},
    presenter::CustomerPresenterImpl,
    routes::*,
    store::ItemStore,
    usecase::{AddCustomerUseCaseImpl, GetByNationalIdUseCaseImpl},
};

/// Wires the customer pipeline on top of `store`
pub fn build_controller(store: Arc<dyn ItemStore>, table: &str) -> Arc<dyn CustomerController> {
    let repository: Arc<dyn CustomerRepository> = Arc::new(CustomerDatabase::new(store, table));
    Arc::new(CustomerControllerImpl::new(
        Arc::new(CustomerPresenterImpl),
        Arc::new(AddCustomerUseCaseImpl::new(repository.clone())),
        Arc::new(GetByNationalIdUseCaseImpl::new(repository)),
    ))
}

pub fn build_app(
    listener: TcpListener,
    store: Arc<dyn ItemStore>,
    table: &str,
) -> Result<Server, std::io::Error> {
    let controller = web::Data::from(build_controller(store, table));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(controller.clone())
            .route("/health_check", web::get().to(health_check))
            .configure(customer_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
