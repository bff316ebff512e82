//! HTTP API handlers

pub mod analysis;
pub mod dashboard;
pub mod health;
pub mod recommendations;
pub mod reports;
pub mod sse;
pub mod ui;
pub mod upload;
pub mod workflow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Maps common errors onto JSON error responses
pub struct ApiError(pub tsa_common::Error);

impl From<tsa_common::Error> for ApiError {
    fn from(error: tsa_common::Error) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            tsa_common::Error::NotFound(_) => StatusCode::NOT_FOUND,
            tsa_common::Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            tsa_common::Error::Backend(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
