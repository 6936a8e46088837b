use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::forms::client_list::ClientListForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::api as api_service;

#[get("/clients")]
pub async fn list_clients(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let form = match ClientListForm::from_query_string(req.query_string()) {
        Ok(form) => form,
        Err(err) => return error_response(err.into()),
    };

    match api_service::list_clients(repo.get_ref(), form) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}

#[get("/clients/{client_id}/logs")]
pub async fn list_client_logs(
    client_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_client_logs(repo.get_ref(), &client_id) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}
