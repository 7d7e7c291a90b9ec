use crate::utils::AppError;

/// Result type for handlers and services that surface errors over HTTP
pub type AppResult<T> = Result<T, AppError>;
