pub mod document;
pub mod employee;
pub mod onboarding;

use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/onboarding")
            .route(web::post().to(onboarding::submit_onboarding)),
    )
    .service(
        web::resource("/v1/employee")
            .route(web::get().to(employee::get_employees)),
    )
    .service(
        web::resource("/v1/document/preview/{preview_id}")
            .route(web::get().to(document::get_document_preview)),
    )
    .service(
        web::resource("/v1/document/{slot}")
            .route(web::post().to(document::upload_document)),
    );
}
