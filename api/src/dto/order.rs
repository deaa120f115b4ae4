//! Client and supplier order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{nested_id, trimmed_code, ClientDto, SupplierDto};
use crate::domain::entities::{ClientOrder, OrderStatus, SupplierOrder};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrderDto {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
    /// Defaults to `in_preparation` when omitted
    pub status: Option<OrderStatus>,
    pub client: Option<ClientDto>,
}

impl ClientOrderDto {
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<ClientOrder> for ClientOrderDto {
    fn from(order: ClientOrder) -> Self {
        Self {
            id: order.id,
            code: Some(order.code),
            order_date: Some(order.order_date),
            status: Some(order.status),
            client: order.client_id.map(ClientDto::reference),
        }
    }
}

impl From<&ClientOrderDto> for ClientOrder {
    fn from(dto: &ClientOrderDto) -> Self {
        Self {
            id: dto.id,
            code: trimmed_code(&dto.code),
            order_date: dto.order_date.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            client_id: nested_id(&dto.client, |c| c.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierOrderDto {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
    /// Defaults to `in_preparation` when omitted
    pub status: Option<OrderStatus>,
    pub supplier: Option<SupplierDto>,
}

impl SupplierOrderDto {
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<SupplierOrder> for SupplierOrderDto {
    fn from(order: SupplierOrder) -> Self {
        Self {
            id: order.id,
            code: Some(order.code),
            order_date: Some(order.order_date),
            status: Some(order.status),
            supplier: order.supplier_id.map(SupplierDto::reference),
        }
    }
}

impl From<&SupplierOrderDto> for SupplierOrder {
    fn from(dto: &SupplierOrderDto) -> Self {
        Self {
            id: dto.id,
            code: trimmed_code(&dto.code),
            order_date: dto.order_date.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            supplier_id: nested_id(&dto.supplier, |s| s.id),
        }
    }
}
