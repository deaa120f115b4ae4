use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{nested_id, trimmed_code, CategoryDto};
use crate::domain::entities::Article;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub designation: Option<String>,
    pub unit_price_excl_tax: Option<Decimal>,
    pub vat_rate: Option<Decimal>,
    /// Derived from the excl-tax price and VAT rate when omitted
    pub unit_price_incl_tax: Option<Decimal>,
    pub photo: Option<String>,
    pub category: Option<CategoryDto>,
}

impl ArticleDto {
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            code: Some(article.code),
            designation: Some(article.designation),
            unit_price_excl_tax: Some(article.unit_price_excl_tax),
            vat_rate: Some(article.vat_rate),
            unit_price_incl_tax: Some(article.unit_price_incl_tax),
            photo: article.photo,
            category: article.category_id.map(CategoryDto::reference),
        }
    }
}

impl From<&ArticleDto> for Article {
    fn from(dto: &ArticleDto) -> Self {
        let mut article = Article {
            id: dto.id,
            code: trimmed_code(&dto.code),
            designation: dto.designation.clone().unwrap_or_default(),
            unit_price_excl_tax: dto.unit_price_excl_tax.unwrap_or_default(),
            vat_rate: dto.vat_rate.unwrap_or_default(),
            unit_price_incl_tax: Decimal::ZERO,
            photo: dto.photo.clone(),
            category_id: nested_id(&dto.category, |c| c.id),
        };
        // Overflow is reported by the validator before any mapping happens
        article.unit_price_incl_tax = dto
            .unit_price_incl_tax
            .or_else(|| article.computed_price_incl_tax())
            .unwrap_or_default();
        article
    }
}
