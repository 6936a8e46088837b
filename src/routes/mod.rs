use actix_web::{HttpResponse, web};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;

/// Registers every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api::list_clients)
            .service(api::list_client_logs),
    );
}

/// Maps a service failure onto the JSON error contract.
///
/// Repository details are logged by the services and never sent to callers.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(report) => HttpResponse::BadRequest().json(ErrorResponse {
            errors: report.messages,
            unknown_keys: report.unknown_keys,
        }),
        ServiceError::NotFound(what) => {
            HttpResponse::NotFound().json(ErrorResponse::new(format!("{what} not found")))
        }
        ServiceError::Repository(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Database error"))
        }
    }
}
