use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Error message
    #[schema(example = "An error occurred")]
    pub message: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    /// The underlying data store is unreachable or timed out.
    ServiceUnavailable(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::Unauthorized(message) => write!(f, "Unauthorized: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::ServiceUnavailable(message) => {
                write!(f, "Service Unavailable: {}", message)
            }
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

fn error_body(message: &str) -> ErrorResponse {
    ErrorResponse {
        success: false,
        message: message.to_string(),
        errors: None,
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(error_body(message)),
            ApiError::Unauthorized(message) => {
                HttpResponse::Unauthorized().json(error_body(message))
            }
            ApiError::NotFound(message) => HttpResponse::NotFound().json(error_body(message)),
            ApiError::Conflict(message) => HttpResponse::Conflict().json(error_body(message)),
            ApiError::ServiceUnavailable(message) => {
                HttpResponse::ServiceUnavailable().json(error_body(message))
            }
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(error_body(message))
            }
            ApiError::ValidationError(errors) => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    success: false,
                    message: "Validation failed".to_string(),
                    errors: Some(errors.clone()),
                })
            }
        }
    }
}

// Driver failures surface unchanged as 503; no retry logic here.
impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::ServiceUnavailable(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}
