//! Article lookup handlers
//!
//! Articles by category and the per-article movement histories.

use axum::{
    extract::State,
    Json,
};

use super::extract::PathParam;
use crate::domain::entities::{
    ArticleRelation, ClientOrderLineRelation, SalesLineRelation, SupplierOrderLineRelation,
};
use crate::dto::{ArticleDto, ClientOrderLineDto, SalesLineDto, SupplierOrderLineDto};
use crate::error::AppError;
use crate::AppState;

/// GET /api/articles/category/:id
pub async fn find_by_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<i32>,
) -> Result<Json<Vec<ArticleDto>>, AppError> {
    let articles = state
        .articles
        .find_all_by(ArticleRelation::Category, Some(category_id))
        .await?;
    Ok(Json(articles))
}

/// GET /api/articles/:id/sales-history
///
/// Every sales line that sold the article.
pub async fn sales_history(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<i32>,
) -> Result<Json<Vec<SalesLineDto>>, AppError> {
    let lines = state
        .sales_lines
        .find_all_by(SalesLineRelation::Article, Some(article_id))
        .await?;
    Ok(Json(lines))
}

/// GET /api/articles/:id/client-order-history
pub async fn client_order_history(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<i32>,
) -> Result<Json<Vec<ClientOrderLineDto>>, AppError> {
    let lines = state
        .client_order_lines
        .find_all_by(ClientOrderLineRelation::Article, Some(article_id))
        .await?;
    Ok(Json(lines))
}

/// GET /api/articles/:id/supplier-order-history
pub async fn supplier_order_history(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<i32>,
) -> Result<Json<Vec<SupplierOrderLineDto>>, AppError> {
    let lines = state
        .supplier_order_lines
        .find_all_by(SupplierOrderLineRelation::Article, Some(article_id))
        .await?;
    Ok(Json(lines))
}
