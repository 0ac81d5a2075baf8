use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{models::UnknownAttributeError, services::catalog::CatalogError};

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    UnknownAttribute(#[from] UnknownAttributeError),

    #[error("No candidate vehicles left after excluding {0}")]
    CatalogExhausted(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UnknownAttribute(_)
            | AppError::CatalogExhausted(_)
            | AppError::Catalog(_)
            | AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        }

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
