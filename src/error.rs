//!
//! # Error Taxonomy
//!
//! This module defines `ApiError`, the closed set of failure kinds used
//! throughout the application, and the single point where an error becomes an
//! HTTP response.
//!
//! The three specialized kinds (`BadRequest`, `Unauthorized`, `NotFound`) carry
//! a fixed status code; `Custom` carries an explicit one (used for the 403
//! ownership failure on task mutation); `Internal` covers everything
//! unanticipated. `ApiError` implements `actix_web::error::ResponseError`, so
//! handlers return `Result<_, ApiError>` and propagate with `?`. `From`
//! implementations cover the fallible collaborators (`sqlx`, `jsonwebtoken`,
//! `bcrypt`, `serde_json`).
//!
//! Internal failures are sanitized at the boundary: the carried detail is
//! logged server-side and the client always receives one fixed generic
//! message, so unexpected errors never leak process internals.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// The message returned to clients for any unanticipated failure.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "We are having some server issues. Please try again later.";

/// All failure kinds a request handler can produce.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input, duplicate resource, business-rule violation (HTTP 400).
    BadRequest(String),
    /// Missing or invalid credential (HTTP 401).
    Unauthorized(String),
    /// Unmatched route or missing resource on read (HTTP 404).
    NotFound(String),
    /// Generic kind with a caller-supplied status, e.g. the 403 ownership failure.
    Custom(StatusCode, String),
    /// Anything unanticipated (HTTP 500). The carried detail is logged, never
    /// sent to the client.
    Internal(String),
}

/// The wire shape of every error response: exactly `{statusCode, error}`.
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
}

impl ApiError {
    /// The HTTP status for this kind. Fixed per variant; `Custom` carries its own.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Custom(status, _) => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Serializes this error into the `{statusCode, error}` body.
    ///
    /// `Internal` always maps to the fixed generic message; its detail stays
    /// server-side.
    pub fn build(&self) -> ErrorBody {
        let error = match self {
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Custom(_, msg) => msg.clone(),
        };
        ErrorBody {
            status_code: self.status().as_u16(),
            error,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Custom(status, msg) => write!(f, "{}: {}", status, msg),
            ApiError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// The centralized error-to-HTTP translator.
///
/// Recognized kinds respond with their own status and message; `Internal`
/// logs the raw detail for operator diagnosis and responds with the sanitized
/// generic body.
impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            log::error!("unexpected failure: {}", detail);
        }
        HttpResponse::build(self.status()).json(self.build())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        match error {
            sqlx::Error::RowNotFound => ApiError::NotFound("Record not found".into()),
            _ => ApiError::Internal(error.to_string()),
        }
    }
}

/// Token verification failures are uniformly unauthorized; callers cannot
/// distinguish a bad signature from a malformed payload.
impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(_: jsonwebtoken::errors::Error) -> ApiError {
        ApiError::Unauthorized("Unauthorized".into())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(error: bcrypt::BcryptError) -> ApiError {
        ApiError::Internal(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> ApiError {
        ApiError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_status_per_kind() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Custom(StatusCode::FORBIDDEN, "x".into()).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_build_shape() {
        let body = ApiError::BadRequest("Email is required".into()).build();
        assert_eq!(
            body,
            ErrorBody {
                status_code: 400,
                error: "Email is required".into()
            }
        );

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"statusCode": 400, "error": "Email is required"})
        );

        let body = ApiError::Custom(StatusCode::FORBIDDEN, "Not Allowed Action".into()).build();
        assert_eq!(body.status_code, 403);
        assert_eq!(body.error, "Not Allowed Action");
    }

    #[test]
    fn test_internal_detail_is_sanitized() {
        let error = ApiError::Internal("connection refused at 10.0.0.5:5432".into());
        let body = error.build();
        assert_eq!(body.status_code, 500);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
        assert!(!body.error.contains("10.0.0.5"));
    }

    #[test]
    fn test_error_responses() {
        let error = ApiError::Unauthorized("Unauthorized".into());
        let response = error.error_response();
        assert_eq!(response.status(), 401);

        let error = ApiError::NotFound("Route not found".into());
        let response = error.error_response();
        assert_eq!(response.status(), 404);

        let error = ApiError::Internal("db exploded".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
