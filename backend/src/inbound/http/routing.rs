//! Route table and extractor configuration for the public API.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::answers::{create_answer, delete_answers, list_answers};
use crate::inbound::http::health::database_check;
use crate::inbound::http::questions::{
    create_question, delete_question, get_question, list_questions, search_questions,
    update_question,
};

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("Invalid JSON body")
        .with_detail(err.to_string())
        .into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("Invalid query string")
        .with_detail(err.to_string())
        .into()
}

/// Register the question, answer and `/test` routes.
///
/// `/questions/search` is registered ahead of `/questions/{id}` so the
/// literal segment wins.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::routing::{configure_routes, route_not_found};
///
/// let _app = App::new()
///     .configure(configure_routes)
///     .default_service(web::to(route_not_found));
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .service(database_check)
        .service(create_question)
        .service(list_questions)
        .service(search_questions)
        .service(get_question)
        .service(update_question)
        .service(delete_question)
        .service(create_answer)
        .service(list_answers)
        .service(delete_answers);
}

/// Fallback for unmatched paths and methods.
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Route not found"))
}
