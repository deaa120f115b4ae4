//! Client and supplier order handlers
//!
//! Lookups by party, status transitions and order lines.

use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};

use super::extract::PathParam;
use crate::domain::entities::{
    ClientOrderLineRelation, ClientOrderRelation, OrderStatus, SupplierOrderLineRelation,
    SupplierOrderRelation,
};
use crate::dto::{ClientOrderDto, ClientOrderLineDto, SupplierOrderDto, SupplierOrderLineDto};
use crate::error::AppError;
use crate::AppState;

/// Request to move an order to a new status
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// GET /api/client-orders/client/:id
pub async fn find_client_orders_by_client(
    State(state): State<AppState>,
    PathParam(client_id): PathParam<i32>,
) -> Result<Json<Vec<ClientOrderDto>>, AppError> {
    let orders = state
        .client_orders
        .find_all_by(ClientOrderRelation::Client, Some(client_id))
        .await?;
    Ok(Json(orders))
}

/// PATCH /api/client-orders/:id/status
///
/// Delivered orders are rejected with `CLIENT_ORDER_NOT_EDITABLE`.
pub async fn update_client_order_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ClientOrderDto>, AppError> {
    let order = state
        .client_orders
        .update_status(Some(id), req.status)
        .await?;
    Ok(Json(order))
}

/// GET /api/client-orders/:id/lines
pub async fn client_order_lines(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Vec<ClientOrderLineDto>>, AppError> {
    let lines = state
        .client_order_lines
        .find_all_by(ClientOrderLineRelation::ClientOrder, Some(id))
        .await?;
    Ok(Json(lines))
}

/// GET /api/supplier-orders/supplier/:id
pub async fn find_supplier_orders_by_supplier(
    State(state): State<AppState>,
    PathParam(supplier_id): PathParam<i32>,
) -> Result<Json<Vec<SupplierOrderDto>>, AppError> {
    let orders = state
        .supplier_orders
        .find_all_by(SupplierOrderRelation::Supplier, Some(supplier_id))
        .await?;
    Ok(Json(orders))
}

/// PATCH /api/supplier-orders/:id/status
pub async fn update_supplier_order_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<SupplierOrderDto>, AppError> {
    let order = state
        .supplier_orders
        .update_status(Some(id), req.status)
        .await?;
    Ok(Json(order))
}

/// GET /api/supplier-orders/:id/lines
pub async fn supplier_order_lines(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Vec<SupplierOrderLineDto>>, AppError> {
    let lines = state
        .supplier_order_lines
        .find_all_by(SupplierOrderLineRelation::SupplierOrder, Some(id))
        .await?;
    Ok(Json(lines))
}
