//! HTTP handlers.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod rentals;

/// JSON body `{"error": message}` with the given builder's status.
pub fn error_body(mut builder: actix_web::HttpResponseBuilder, message: &str) -> HttpResponse {
    builder.json(json!({ "error": message }))
}

/// Maps a service failure onto the matching HTTP status.
pub fn service_error_response(err: &ServiceError, not_found_message: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => error_body(HttpResponse::NotFound(), not_found_message),
        ServiceError::Validation(message) => error_body(HttpResponse::BadRequest(), message),
        ServiceError::Repository(_) | ServiceError::Internal(_) => {
            log::error!("Request failed: {err}");
            error_body(HttpResponse::InternalServerError(), &err.to_string())
        }
    }
}
