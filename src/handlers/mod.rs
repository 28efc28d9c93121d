// handlers/mod.rs - one module per resource
//
// Handlers validate through the extractors in `middleware::extract`, call a
// service with the pool from `AppState`, and project the result.

pub mod day_routine;
pub mod event;
pub mod home;
pub mod person;
pub mod routine_template;

use axum::Json;

use crate::error::ApiError;
use crate::services::ServiceError;

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Log an expected failure and convert it for the response.
///
/// Database errors are logged when they become an `ApiError`.
fn reject(action: &str, err: ServiceError) -> ApiError {
    if !matches!(err, ServiceError::Database(_)) {
        tracing::warn!("Failed to {}: {}", action, err);
    }
    err.into()
}
