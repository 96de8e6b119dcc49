//! Error handling module for the roster backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::export::ExportError;
use crate::models::CustomizationDenied;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const FORBIDDEN_CUSTOMIZATION: &str = "FORBIDDEN_CUSTOMIZATION";
    pub const EXPORT_FAILED: &str = "EXPORT_FAILED";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request body failed domain validation
    Validation(String),
    /// Customization field not allowed for the member's account tier
    Forbidden { message: String, field: &'static str },
    /// Export could not be serialized; nothing was produced
    Export(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Forbidden { .. } => codes::FORBIDDEN_CUSTOMIZATION,
            AppError::Export(_) => codes::EXPORT_FAILED,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Forbidden { message, .. } => message.clone(),
            AppError::Export(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<CustomizationDenied> for AppError {
    fn from(err: CustomizationDenied) -> Self {
        tracing::debug!("Customization denied: {}", err);
        AppError::Forbidden {
            message: err.to_string(),
            field: err.field,
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        tracing::error!("Export error: {:?}", err);
        AppError::Export(err.to_string())
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let details = match error {
            AppError::Forbidden { field, .. } => Some(serde_json::json!({ "field": field })),
            _ => None,
        };

        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
