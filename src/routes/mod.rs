use actix_web::error::BlockingError;
use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::dto::MessageDto;
use crate::services::{ServiceError, ServiceResult, messages};

pub mod categories;
pub mod comments;
pub mod reviews;
pub mod users;

/// Register every `/api` endpoint.
///
/// Unmatched paths are not handled here; the application installs
/// [`invalid_path`] as its default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(categories::show_categories)
            .service(reviews::show_reviews)
            .service(reviews::show_review)
            .service(reviews::update_review_votes)
            .service(comments::show_review_comments)
            .service(comments::add_comment)
            .service(users::show_users),
    );
}

/// Fallback for every request that matched no route.
pub async fn invalid_path() -> HttpResponse {
    HttpResponse::NotFound().json(MessageDto::new(messages::INVALID_PATH))
}

pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::BadRequest(msg) => HttpResponse::BadRequest().json(MessageDto::new(msg)),
        ServiceError::NotFound(msg) => HttpResponse::NotFound().json(MessageDto::new(msg)),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(MessageDto::new(messages::INTERNAL_ERROR))
        }
    }
}

/// Turn the outcome of a blocking service call into a response.
pub fn respond<T>(
    result: Result<ServiceResult<T>, BlockingError>,
    on_success: impl FnOnce(T) -> HttpResponse,
) -> HttpResponse {
    match result {
        Ok(Ok(value)) => on_success(value),
        Ok(Err(err)) => error_response(err),
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            error_response(ServiceError::Internal)
        }
    }
}

/// Largest request body the JSON endpoints will read.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Read a request body as JSON.
///
/// Bodies are read from the raw payload so that unparsable, oversized or
/// truncated input is reported with the endpoint's own message instead of
/// the framework's. All of those come back as `Value::Null`.
pub async fn read_body(payload: web::Payload) -> Value {
    match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(bytes)) => parse_body(&bytes),
        Ok(Err(e)) => {
            log::warn!("Failed to read request body: {e}");
            Value::Null
        }
        Err(_) => {
            log::warn!("Request body exceeds {MAX_BODY_BYTES} bytes");
            Value::Null
        }
    }
}

fn parse_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
