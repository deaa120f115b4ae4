//! Supplier order domain entity
//!
//! An order placed with a supplier to replenish stock.

use chrono::{DateTime, Utc};

use super::{OrderRecord, OrderStatus, Record, Relation};
use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierOrder {
    pub id: Option<i32>,
    pub code: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub supplier_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierOrderRelation {
    Supplier,
}

impl Relation for SupplierOrderRelation {
    fn parent(self) -> &'static str {
        match self {
            SupplierOrderRelation::Supplier => "Supplier",
        }
    }

    fn not_found(self) -> ErrorCode {
        match self {
            SupplierOrderRelation::Supplier => ErrorCode::SupplierNotFound,
        }
    }
}

impl Record for SupplierOrder {
    type Relation = SupplierOrderRelation;

    const NATURAL_KEY: Option<&'static str> = Some("code");

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn reference(&self, relation: SupplierOrderRelation) -> Option<i32> {
        match relation {
            SupplierOrderRelation::Supplier => self.supplier_id,
        }
    }

    fn is_editable(&self) -> bool {
        self.status.is_editable()
    }
}

impl OrderRecord for SupplierOrder {
    fn status(&self) -> OrderStatus {
        self.status
    }

    fn with_status(self, status: OrderStatus) -> Self {
        Self { status, ..self }
    }
}
