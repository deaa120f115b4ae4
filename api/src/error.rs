//! Unified error types for the Stockroom API
//!
//! This module defines error types for each layer:
//! - `ErrorCode`: Stable machine-readable category attached to every business failure
//! - `DomainError`: Core business logic errors
//! - `AuthError`: Bearer token and credential errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable category code carried by every business failure.
///
/// The string form (e.g. `ARTICLE_NOT_FOUND`) and the numeric form are both
/// part of the public error contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    IdNotValid,

    ArticleNotFound,
    ArticleNotValid,
    ArticleAlreadyInUse,

    CategoryNotFound,
    CategoryNotValid,
    CategoryAlreadyInUse,

    ClientNotFound,
    ClientNotValid,
    ClientAlreadyInUse,

    ClientOrderNotFound,
    ClientOrderNotValid,
    ClientOrderAlreadyInUse,
    ClientOrderNotEditable,

    SupplierOrderNotFound,
    SupplierOrderNotValid,
    SupplierOrderAlreadyInUse,
    SupplierOrderNotEditable,

    SupplierNotFound,
    SupplierNotValid,
    SupplierAlreadyInUse,

    ClientOrderLineNotFound,
    ClientOrderLineNotValid,
    ClientOrderLineAlreadyInUse,

    SupplierOrderLineNotFound,
    SupplierOrderLineNotValid,
    SupplierOrderLineAlreadyInUse,

    BadCredentials,

    SaleNotFound,
    SaleNotValid,
    SaleAlreadyInUse,

    SalesLineNotFound,
    SalesLineNotValid,
    SalesLineAlreadyInUse,
}

impl ErrorCode {
    /// Numeric form of the code, grouped by entity in blocks of a thousand
    pub fn number(self) -> u32 {
        match self {
            ErrorCode::IdNotValid => 10,
            ErrorCode::ArticleNotFound => 1000,
            ErrorCode::ArticleNotValid => 1001,
            ErrorCode::ArticleAlreadyInUse => 1002,
            ErrorCode::CategoryNotFound => 2000,
            ErrorCode::CategoryNotValid => 2001,
            ErrorCode::CategoryAlreadyInUse => 2002,
            ErrorCode::ClientNotFound => 3000,
            ErrorCode::ClientNotValid => 3001,
            ErrorCode::ClientAlreadyInUse => 3002,
            ErrorCode::ClientOrderNotFound => 4000,
            ErrorCode::ClientOrderNotValid => 4001,
            ErrorCode::ClientOrderAlreadyInUse => 4002,
            ErrorCode::ClientOrderNotEditable => 4003,
            ErrorCode::SupplierOrderNotFound => 5000,
            ErrorCode::SupplierOrderNotValid => 5001,
            ErrorCode::SupplierOrderAlreadyInUse => 5002,
            ErrorCode::SupplierOrderNotEditable => 5003,
            ErrorCode::SupplierNotFound => 7000,
            ErrorCode::SupplierNotValid => 7001,
            ErrorCode::SupplierAlreadyInUse => 7002,
            ErrorCode::ClientOrderLineNotFound => 8000,
            ErrorCode::ClientOrderLineNotValid => 8001,
            ErrorCode::ClientOrderLineAlreadyInUse => 8002,
            ErrorCode::SupplierOrderLineNotFound => 9000,
            ErrorCode::SupplierOrderLineNotValid => 9001,
            ErrorCode::SupplierOrderLineAlreadyInUse => 9002,
            ErrorCode::BadCredentials => 12003,
            ErrorCode::SaleNotFound => 13000,
            ErrorCode::SaleNotValid => 13001,
            ErrorCode::SaleAlreadyInUse => 13002,
            ErrorCode::SalesLineNotFound => 14000,
            ErrorCode::SalesLineNotValid => 14001,
            ErrorCode::SalesLineAlreadyInUse => 14002,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Reuse the serde spelling so logs and responses agree
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(s)) => f.write_str(&s),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Field-level validation failed
    #[error("{message}")]
    InvalidEntity {
        message: String,
        code: ErrorCode,
        errors: Vec<String>,
    },

    /// A row referenced by id or code does not exist
    #[error("{message}")]
    EntityNotFound { message: String, code: ErrorCode },

    /// A business-rule precondition failed
    #[error("{message}")]
    InvalidOperation { message: String, code: ErrorCode },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn invalid_entity(message: impl Into<String>, code: ErrorCode, errors: Vec<String>) -> Self {
        DomainError::InvalidEntity {
            message: message.into(),
            code,
            errors,
        }
    }

    pub fn not_found(message: impl Into<String>, code: ErrorCode) -> Self {
        DomainError::EntityNotFound {
            message: message.into(),
            code,
        }
    }

    pub fn invalid_operation(message: impl Into<String>, code: ErrorCode) -> Self {
        DomainError::InvalidOperation {
            message: message.into(),
            code,
        }
    }

    /// Category code, if this is a business failure
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DomainError::InvalidEntity { code, .. }
            | DomainError::EntityNotFound { code, .. }
            | DomainError::InvalidOperation { code, .. } => Some(*code),
            DomainError::Database(_) => None,
        }
    }
}

/// Bearer token and credential errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Bad credentials")]
    BadCredentials,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code, details, errors) = match self {
            AppError::Domain(DomainError::InvalidEntity {
                message,
                code,
                errors,
            }) => (
                StatusCode::BAD_REQUEST,
                "Invalid entity",
                Some(code),
                Some(message),
                errors,
            ),
            AppError::Domain(DomainError::EntityNotFound { message, code }) => (
                StatusCode::NOT_FOUND,
                "Not found",
                Some(code),
                Some(message),
                Vec::new(),
            ),
            AppError::Domain(DomainError::InvalidOperation { message, code }) => (
                StatusCode::BAD_REQUEST,
                "Invalid operation",
                Some(code),
                Some(message),
                Vec::new(),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                    Vec::new(),
                )
            }
            AppError::Auth(AuthError::BadCredentials) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some(ErrorCode::BadCredentials),
                Some("Login and / or password is incorrect".to_string()),
                Vec::new(),
            ),
            AppError::Auth(e) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                None,
                Some(e.to_string()),
                Vec::new(),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request",
                None,
                Some(msg),
                Vec::new(),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            code,
            number: code.map(ErrorCode::number),
            details,
            errors,
        });

        (status, body).into_response()
    }
}
