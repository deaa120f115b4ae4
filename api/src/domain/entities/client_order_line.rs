//! Client order line domain entity

use rust_decimal::Decimal;

use super::{Record, Relation};
use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientOrderLine {
    pub id: Option<i32>,
    pub client_order_id: Option<i32>,
    pub article_id: Option<i32>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl ClientOrderLine {
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOrderLineRelation {
    ClientOrder,
    Article,
}

impl Relation for ClientOrderLineRelation {
    fn parent(self) -> &'static str {
        match self {
            ClientOrderLineRelation::ClientOrder => "Client order",
            ClientOrderLineRelation::Article => "Article",
        }
    }

    fn not_found(self) -> ErrorCode {
        match self {
            ClientOrderLineRelation::ClientOrder => ErrorCode::ClientOrderNotFound,
            ClientOrderLineRelation::Article => ErrorCode::ArticleNotFound,
        }
    }
}

impl Record for ClientOrderLine {
    type Relation = ClientOrderLineRelation;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn reference(&self, relation: ClientOrderLineRelation) -> Option<i32> {
        match relation {
            ClientOrderLineRelation::ClientOrder => self.client_order_id,
            ClientOrderLineRelation::Article => self.article_id,
        }
    }
}
