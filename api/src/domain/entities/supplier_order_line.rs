//! Supplier order line domain entity

use rust_decimal::Decimal;

use super::{Record, Relation};
use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierOrderLine {
    pub id: Option<i32>,
    pub supplier_order_id: Option<i32>,
    pub article_id: Option<i32>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl SupplierOrderLine {
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierOrderLineRelation {
    SupplierOrder,
    Article,
}

impl Relation for SupplierOrderLineRelation {
    fn parent(self) -> &'static str {
        match self {
            SupplierOrderLineRelation::SupplierOrder => "Supplier order",
            SupplierOrderLineRelation::Article => "Article",
        }
    }

    fn not_found(self) -> ErrorCode {
        match self {
            SupplierOrderLineRelation::SupplierOrder => ErrorCode::SupplierOrderNotFound,
            SupplierOrderLineRelation::Article => ErrorCode::ArticleNotFound,
        }
    }
}

impl Record for SupplierOrderLine {
    type Relation = SupplierOrderLineRelation;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn reference(&self, relation: SupplierOrderLineRelation) -> Option<i32> {
        match relation {
            SupplierOrderLineRelation::SupplierOrder => self.supplier_order_id,
            SupplierOrderLineRelation::Article => self.article_id,
        }
    }
}
