use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// No premium bracket covers the requested monthly salary
    #[error("no premium bracket covers monthly salary {salary}")]
    BracketNotFound { salary: i32 },

    /// No withholding tax bracket covers the net salary after the employee
    /// social-insurance deduction
    #[error("no withholding tax bracket covers net salary {net_salary}")]
    WithholdingBracketNotFound { net_salary: Decimal },

    /// Unknown employment-insurance business type
    #[error("no employment insurance rate for business type '{business_type}'")]
    RateNotFound { business_type: String },

    /// Unknown premium bracket grade
    #[error("no premium bracket for grade '{grade}'")]
    GradeNotFound { grade: String },

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BracketNotFound { .. }
            | AppError::WithholdingBracketNotFound { .. }
            | AppError::RateNotFound { .. }
            | AppError::GradeNotFound { .. }
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Error category reported in the response body
    pub fn category(&self) -> &'static str {
        if self.status_code() == StatusCode::BAD_REQUEST {
            "Bad Request"
        } else {
            "Internal Server Error"
        }
    }

    /// Render the error as the JSON error body carrying the request path.
    /// Controllers call this so the body can include the path the client hit.
    pub fn to_response(&self, path: &str) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{} on {}: {}", status, path, self);
        } else {
            tracing::warn!("{} on {}: {}", status, path, self);
        }
        HttpResponse::build(status).json(ErrorBody::new(status, self.category(), &self.to_string(), path))
    }
}

/// JSON error response body shared by domain errors and binding failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, error: &str, message: &str, path: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: error.to_string(),
            message: message.to_string(),
            path: path.to_string(),
        }
    }
}

/// Query-string binding failures render the same JSON error body with the
/// "Validation Error" category instead of actix's default plain-text 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let body = ErrorBody::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            &err.to_string(),
            req.path(),
        );
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
            .into()
    })
}

/// JSON payload binding failures, same body shape as `query_config`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let body = ErrorBody::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            &err.to_string(),
            req.path(),
        );
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
            .into()
    })
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
