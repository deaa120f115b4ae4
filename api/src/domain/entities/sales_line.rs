//! Sales line domain entity

use rust_decimal::Decimal;

use super::{Record, Relation};
use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq)]
pub struct SalesLine {
    pub id: Option<i32>,
    pub sale_id: Option<i32>,
    pub article_id: Option<i32>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl SalesLine {
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesLineRelation {
    Sale,
    Article,
}

impl Relation for SalesLineRelation {
    fn parent(self) -> &'static str {
        match self {
            SalesLineRelation::Sale => "Sale",
            SalesLineRelation::Article => "Article",
        }
    }

    fn not_found(self) -> ErrorCode {
        match self {
            SalesLineRelation::Sale => ErrorCode::SaleNotFound,
            SalesLineRelation::Article => ErrorCode::ArticleNotFound,
        }
    }
}

impl Record for SalesLine {
    type Relation = SalesLineRelation;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn reference(&self, relation: SalesLineRelation) -> Option<i32> {
        match relation {
            SalesLineRelation::Sale => self.sale_id,
            SalesLineRelation::Article => self.article_id,
        }
    }
}
