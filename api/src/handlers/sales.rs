//! Sale handlers

use axum::{
    extract::State,
    Json,
};

use super::extract::PathParam;
use crate::domain::entities::SalesLineRelation;
use crate::dto::SalesLineDto;
use crate::error::AppError;
use crate::AppState;

/// GET /api/sales/:id/lines
pub async fn sale_lines(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Vec<SalesLineDto>>, AppError> {
    let lines = state
        .sales_lines
        .find_all_by(SalesLineRelation::Sale, Some(id))
        .await?;
    Ok(Json(lines))
}
