use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::EmployeeRecord;

#[derive(Deserialize)]
pub struct EmployeeQueryParams {
    aadhaar: Option<String>,
}

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    let employees: Vec<EmployeeRecord> = match &query.aadhaar {
        Some(aadhaar) => store.find_by_identity(aadhaar)?.into_iter().collect(),
        None => store.list()?,
    };

    Ok(HttpResponse::Ok().json(employees))
}
