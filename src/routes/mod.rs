pub mod health;
pub mod tasks;
pub mod users;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::ApiError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(health::health)
        .service(
            web::scope("/users")
                .service(users::login)
                .service(users::logout)
                .service(users::create_user)
                .service(users::current_user),
        )
        .service(
            web::scope("/tasks")
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}

/// Catch-all for unmatched routes, registered as the app's default service.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound("Route not found".into()))
}

// Extraction failures happen before any handler runs, so without these hooks
// the framework would answer with its plain-text defaults instead of the
// `{statusCode, error}` envelope.

/// An unreadable or malformed JSON body is the caller's mistake; the parser
/// detail stays out of the response.
fn json_error_handler(_err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest("Invalid request body".into()).into()
}

/// A path segment that fails to parse (e.g. a non-UUID task id) matches no
/// resource, which is the same outcome as an unmatched route.
fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::NotFound("Route not found".into()).into()
}
