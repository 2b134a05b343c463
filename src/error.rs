//! Submission fault taxonomy and the uniform failure response.
//!
//! Every fault inside the submission path is converted into the same
//! `{"success": false, "message": ...}` body with HTTP 500; no fault is
//! allowed to surface as a framework error page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field was absent. The message is just the quoted key,
    /// the shape existing clients match on.
    #[error("'{0}'")]
    MissingField(&'static str),

    #[error("failed to read multipart form: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("Submission failed: {}", self);
        let body = Json(json!({ "success": false, "message": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
