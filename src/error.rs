use thiserror::Error;

// Import Axum types for HTTP response conversion
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the sqlx library.
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A validation error (malformed input caught at the boundary).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert custom Error to HTTP response
///
/// Maps each error variant to an HTTP status code and a JSON body with an
/// error message and error code. Store-level detail is logged server-side
/// and never forwarded to the client.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = match &self {
            Error::Validation(msg) => {
                serde_json::json!({
                    "error": msg,
                    "code": "VALIDATION_ERROR"
                })
            }
            Error::Sqlx(e) => {
                tracing::error!(error = %e, "database error");
                serde_json::json!({
                    "error": "Database error",
                    "code": "INTERNAL_ERROR"
                })
            }
            Error::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                serde_json::json!({
                    "error": "Internal server error",
                    "code": "INTERNAL_ERROR"
                })
            }
            Error::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                serde_json::json!({
                    "error": "Configuration error",
                    "code": "CONFIG_ERROR"
                })
            }
        };

        let status = match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(body)).into_response()
    }
}
