use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Store traits report failures as boxed errors; any of them aborts the request.
impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}
