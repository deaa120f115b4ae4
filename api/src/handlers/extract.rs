//! Request extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Path` whose rejection is rendered as the JSON error body.
///
/// ```ignore
/// async fn handler(PathParam(id): PathParam<i32>) -> Result<Json<()>, AppError> { .. }
/// ```
pub struct PathParam<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => {
                tracing::warn!(uri = %parts.uri, "Invalid path parameter");
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
