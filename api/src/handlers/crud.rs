//! Generic entity handlers
//!
//! The same five endpoints are mounted for every entity kind, each router
//! carrying its own `CrudService` as state.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::extract::PathParam;
use crate::app::{CrudService, EntityKind};
use crate::domain::entities::Record;
use crate::error::AppError;

/// Routes for one kind, to be nested under its collection path
pub fn routes<K, S>(service: Arc<CrudService<K>>) -> Router<S>
where
    K: EntityKind,
    S: Clone + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", get(find_all::<K>).post(save::<K>))
        .route("/:id", get(find_by_id::<K>).delete(delete::<K>));

    let router = if <K::Record as Record>::NATURAL_KEY.is_some() {
        router.route("/code/:code", get(find_by_code::<K>))
    } else {
        router
    };

    router.with_state(service)
}

/// POST /
///
/// Create an entity, or replace it when the body carries an id.
/// A `null` body is reported as an invalid entity.
pub async fn save<K: EntityKind>(
    State(service): State<Arc<CrudService<K>>>,
    Json(dto): Json<Option<K::Dto>>,
) -> Result<Json<K::Dto>, AppError> {
    let saved = service.save(dto).await?;
    Ok(Json(saved))
}

/// GET /
pub async fn find_all<K: EntityKind>(
    State(service): State<Arc<CrudService<K>>>,
) -> Result<Json<Vec<K::Dto>>, AppError> {
    Ok(Json(service.find_all().await?))
}

/// GET /:id
pub async fn find_by_id<K: EntityKind>(
    State(service): State<Arc<CrudService<K>>>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<K::Dto>, AppError> {
    Ok(Json(service.find_by_id(Some(id)).await?))
}

/// GET /code/:code
pub async fn find_by_code<K: EntityKind>(
    State(service): State<Arc<CrudService<K>>>,
    PathParam(code): PathParam<String>,
) -> Result<Json<K::Dto>, AppError> {
    service
        .find_by_natural_key(&code)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::BadRequest(format!("{} code is blank", K::LABEL)))
}

/// DELETE /:id
pub async fn delete<K: EntityKind>(
    State(service): State<Arc<CrudService<K>>>,
    PathParam(id): PathParam<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(Some(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
