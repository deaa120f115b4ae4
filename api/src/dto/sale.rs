use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trimmed_code;
use crate::domain::entities::Sale;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDto {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub sale_date: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

impl SaleDto {
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<Sale> for SaleDto {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            code: Some(sale.code),
            sale_date: Some(sale.sale_date),
            comment: sale.comment,
        }
    }
}

impl From<&SaleDto> for Sale {
    fn from(dto: &SaleDto) -> Self {
        Self {
            id: dto.id,
            code: trimmed_code(&dto.code),
            sale_date: dto.sale_date.unwrap_or_default(),
            comment: dto.comment.clone(),
        }
    }
}
