//!
//! # Success Envelope
//!
//! Every successful response is wrapped in the same JSON envelope:
//! `{statusCode, message?, data?}`. `ApiResponseBuilder` accumulates the
//! optional parts fluently and `build()` finalizes the immutable envelope.
//! The payload is an opaque `serde_json::Value`; no shape validation is
//! performed on it.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// The uniform wrapper around every successful response body.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Value>)]
    pub data: Option<Value>,
}

/// Fluent accumulator for `ApiResponse`. Status defaults to 200; message and
/// data are independent and optional.
#[derive(Debug, Default)]
pub struct ApiResponseBuilder {
    status_code: Option<u16>,
    message: Option<String>,
    data: Option<Value>,
}

impl ApiResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> ApiResponse {
        ApiResponse {
            status_code: self.status_code.unwrap_or(200),
            message: self.message,
            data: self.data,
        }
    }
}
