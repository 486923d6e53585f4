//! Server error types and handling.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Server error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// A page template failed to render.
    Template(handlebars::RenderError),
    /// Internal server error.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg)
            }
            ApiError::Template(e) => {
                error!(error = %e, "Template rendering failed");
                return (StatusCode::INTERNAL_SERVER_ERROR, Html(error_page(&e.to_string())))
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::Template(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Template(e) => write!(f, "Template error: {}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Plain page shown when the templates themselves cannot be used.
fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Vinoteca - Error</title></head>\n<body>\n\
         <h1>Something went wrong</h1>\n<pre>{}</pre>\n</body>\n</html>",
        handlebars::html_escape(message)
    )
}
