use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResponseBuilder};

/// Health check endpoint
///
/// Liveness probe. Like every other route, the status and timestamp travel
/// inside the uniform envelope.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse)
    ),
    tags = ["health"],
    operation_id = "health",
    security([])
)]
#[get("/health")]
pub async fn health() -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .data(json!({
                "status": "ok",
                "timestamp": Utc::now()
            }))
            .build(),
    ))
}
