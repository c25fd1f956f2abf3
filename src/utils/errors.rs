//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::schema::FieldErrors;
use crate::services::auth_client::AuthFailure;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Auth provider error: {0}")]
    Auth(AuthFailure),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        AppError::Auth(failure)
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message,
            details: None,
            code: Some(code.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Database Error",
                        "Falha na operação. Tente novamente.".to_string(),
                        "DB_ERROR",
                    ),
                )
            }

            AppError::Validation(errors) => {
                tracing::debug!("Validation error: {}", errors);
                let mut body = ErrorResponse::new(
                    "Validation Error",
                    "Os dados informados são inválidos".to_string(),
                    "VALIDATION_ERROR",
                );
                body.details = Some(json!(errors));
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Unauthorized", msg, "UNAUTHORIZED"),
                )
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("Forbidden access: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new("Forbidden", msg, "FORBIDDEN"),
                )
            }

            AppError::NotFound(msg) => {
                tracing::debug!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
                )
            }

            AppError::Conflict(msg) => {
                tracing::debug!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new("Conflict", msg, "CONFLICT"),
                )
            }

            AppError::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", msg, "BAD_REQUEST"),
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "Falha na operação. Tente novamente.".to_string(),
                        "INTERNAL_ERROR",
                    ),
                )
            }

            AppError::Auth(failure) => {
                tracing::info!("Auth provider rejected request: {:?}", failure);
                let status = match failure {
                    AuthFailure::InvalidCredentials | AuthFailure::EmailNotConfirmed => {
                        StatusCode::UNAUTHORIZED
                    }
                    AuthFailure::AlreadyRegistered => StatusCode::CONFLICT,
                    AuthFailure::Unknown(_) => StatusCode::BAD_GATEWAY,
                };
                (
                    status,
                    ErrorResponse::new(
                        "Auth Error",
                        failure.user_message().to_string(),
                        failure.code(),
                    ),
                )
            }

            AppError::NotImplemented(msg) => {
                tracing::info!("Not implemented: {}", msg);
                (
                    StatusCode::NOT_IMPLEMENTED,
                    ErrorResponse::new("Not Implemented", msg, "NOT_IMPLEMENTED"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' não encontrado", resource, id))
}

/// Función helper para crear errores de acceso prohibido
pub fn forbidden_error(operation: &str) -> AppError {
    AppError::Forbidden(format!("Você não tem permissão para {}", operation))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
