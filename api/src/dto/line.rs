//! Sales and order line DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{nested_id, ArticleDto, ClientOrderDto, SaleDto, SupplierOrderDto};
use crate::domain::entities::{ClientOrderLine, SalesLine, SupplierOrderLine};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesLineDto {
    pub id: Option<i32>,
    pub sale: Option<SaleDto>,
    pub article: Option<ArticleDto>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
}

impl From<SalesLine> for SalesLineDto {
    fn from(line: SalesLine) -> Self {
        Self {
            id: line.id,
            sale: line.sale_id.map(SaleDto::reference),
            article: line.article_id.map(ArticleDto::reference),
            quantity: Some(line.quantity),
            unit_price: Some(line.unit_price),
        }
    }
}

impl From<&SalesLineDto> for SalesLine {
    fn from(dto: &SalesLineDto) -> Self {
        Self {
            id: dto.id,
            sale_id: nested_id(&dto.sale, |p| p.id),
            article_id: nested_id(&dto.article, |a| a.id),
            quantity: dto.quantity.unwrap_or_default(),
            unit_price: dto.unit_price.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOrderLineDto {
    pub id: Option<i32>,
    pub client_order: Option<ClientOrderDto>,
    pub article: Option<ArticleDto>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
}

impl From<ClientOrderLine> for ClientOrderLineDto {
    fn from(line: ClientOrderLine) -> Self {
        Self {
            id: line.id,
            client_order: line.client_order_id.map(ClientOrderDto::reference),
            article: line.article_id.map(ArticleDto::reference),
            quantity: Some(line.quantity),
            unit_price: Some(line.unit_price),
        }
    }
}

impl From<&ClientOrderLineDto> for ClientOrderLine {
    fn from(dto: &ClientOrderLineDto) -> Self {
        Self {
            id: dto.id,
            client_order_id: nested_id(&dto.client_order, |p| p.id),
            article_id: nested_id(&dto.article, |a| a.id),
            quantity: dto.quantity.unwrap_or_default(),
            unit_price: dto.unit_price.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierOrderLineDto {
    pub id: Option<i32>,
    pub supplier_order: Option<SupplierOrderDto>,
    pub article: Option<ArticleDto>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
}

impl From<SupplierOrderLine> for SupplierOrderLineDto {
    fn from(line: SupplierOrderLine) -> Self {
        Self {
            id: line.id,
            supplier_order: line.supplier_order_id.map(SupplierOrderDto::reference),
            article: line.article_id.map(ArticleDto::reference),
            quantity: Some(line.quantity),
            unit_price: Some(line.unit_price),
        }
    }
}

impl From<&SupplierOrderLineDto> for SupplierOrderLine {
    fn from(dto: &SupplierOrderLineDto) -> Self {
        Self {
            id: dto.id,
            supplier_order_id: nested_id(&dto.supplier_order, |p| p.id),
            article_id: nested_id(&dto.article, |a| a.id),
            quantity: dto.quantity.unwrap_or_default(),
            unit_price: dto.unit_price.unwrap_or_default(),
        }
    }
}
