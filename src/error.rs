//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The error is rendered as a
//! `{ "message": ... }` JSON body; not-found lookups additionally carry
//! `"found": false`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by services and handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be decoded into the expected payload.
    #[error("{message}: {reason}")]
    Decode { message: String, reason: String },

    /// A required request parameter is missing.
    #[error("{message}")]
    Validation { message: String },

    /// A database operation failed.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// No row matched the lookup.
    #[error("{message}")]
    NotFound { message: String },

    /// The request could not be served: a malformed or unknown book id, or
    /// an unsupported lookup key.
    #[error("{message}")]
    BadRequest { message: String },
}

/// JSON body written for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
}

impl AppError {
    pub fn decode(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Persistence {
            message: message.into(),
            source,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Replaces the client-facing message of a persistence or not-found error.
    ///
    /// Repositories report generic database failures; services use this to
    /// attach the message of the operation that failed.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::Persistence { source, .. } => Self::Persistence {
                message: message.into(),
                source,
            },
            Self::NotFound { .. } => Self::NotFound {
                message: message.into(),
            },
            other => other,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Persistence { .. } | Self::NotFound { .. } | Self::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Builds the JSON body sent to the client.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::Decode { message, .. }
            | Self::Validation { message }
            | Self::Persistence { message, .. }
            | Self::BadRequest { message } => ErrorBody {
                message: message.clone(),
                found: None,
            },
            Self::NotFound { message } => ErrorBody {
                message: message.clone(),
                found: Some(false),
            },
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::persistence("Database error", e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::decode("request failed", rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::decode("request failed", errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AppError::Decode { reason, .. } => {
                tracing::warn!(%reason, "Rejected request body");
            }
            AppError::Validation { message } | AppError::BadRequest { message } => {
                tracing::warn!("{}", message);
            }
            AppError::NotFound { message } => {
                tracing::debug!("{}", message);
            }
        }

        (self.status_code(), Json(self.to_body())).into_response()
    }
}
