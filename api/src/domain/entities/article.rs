//! Article domain entity
//!
//! An item held in stock. Every article belongs to a category.

use rust_decimal::Decimal;

use super::{Record, Relation};
use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: Option<i32>,
    /// Business code, unique across articles
    pub code: String,
    pub designation: String,
    pub unit_price_excl_tax: Decimal,
    /// VAT rate as a percentage (e.g. 20 for 20%)
    pub vat_rate: Decimal,
    pub unit_price_incl_tax: Decimal,
    pub photo: Option<String>,
    pub category_id: Option<i32>,
}

impl Article {
    /// Price including tax derived from the excl-tax price and VAT rate
    pub fn computed_price_incl_tax(&self) -> Option<Decimal> {
        price_incl_tax(self.unit_price_excl_tax, self.vat_rate)
    }
}

/// `excl * (1 + rate / 100)` rounded to cents, or `None` on overflow
pub fn price_incl_tax(excl_tax: Decimal, vat_rate: Decimal) -> Option<Decimal> {
    let factor = (vat_rate / Decimal::ONE_HUNDRED).checked_add(Decimal::ONE)?;
    excl_tax.checked_mul(factor).map(|price| price.round_dp(2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleRelation {
    Category,
}

impl Relation for ArticleRelation {
    fn parent(self) -> &'static str {
        match self {
            ArticleRelation::Category => "Category",
        }
    }

    fn not_found(self) -> ErrorCode {
        match self {
            ArticleRelation::Category => ErrorCode::CategoryNotFound,
        }
    }
}

impl Record for Article {
    type Relation = ArticleRelation;

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

    fn reference(&self, relation: ArticleRelation) -> Option<i32> {
        match relation {
            ArticleRelation::Category => self.category_id,
        }
    }
}
