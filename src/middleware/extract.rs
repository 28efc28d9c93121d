use axum::{
    async_trait,
    extract::{Form, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Form<T>` whose rejection is reported as a 400 `{"message"}` body.
#[derive(Debug, Clone)]
pub struct ValidForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected form payload: {}", rejection.body_text());
                Err(ApiError::validation_error(rejection.body_text()))
            }
        }
    }
}

/// `Query<T>` whose rejection is reported as a 400 `{"message"}` body.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected query string: {}", rejection.body_text());
                Err(ApiError::validation_error(rejection.body_text()))
            }
        }
    }
}
