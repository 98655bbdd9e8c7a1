mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod reconciler;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use crate::config::Config;
use crate::db::documents::DocumentPreviews;
use crate::db::EmployeeStore;
use crate::utils::employee_id::EmployeeIdGenerator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    // Roster lives for the life of the process
    let store: Arc<dyn EmployeeStore> = Arc::new(
        db::create_store(config.seed_employees_path.as_deref()).map_err(|err| {
            error!("{}", err);
            std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string())
        })?,
    );
    let store = web::Data::from(store);
    let ids = web::Data::new(EmployeeIdGenerator::new());
    let previews = web::Data::new(DocumentPreviews::new(config.max_document_previews));
    let payload_limit = config.max_document_bytes;
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(ids.clone())
            .app_data(previews.clone())
            .app_data(config.clone())
            .app_data(web::PayloadConfig::new(payload_limit))
            .configure(handlers::routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
