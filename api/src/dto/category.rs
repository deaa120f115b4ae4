use serde::{Deserialize, Serialize};

use super::trimmed_code;
use crate::domain::entities::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<i32>,
    pub code: Option<String>,
    pub designation: Option<String>,
}

impl CategoryDto {
    /// A nested reference carrying only the id
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            code: Some(category.code),
            designation: Some(category.designation),
        }
    }
}

impl From<&CategoryDto> for Category {
    fn from(dto: &CategoryDto) -> Self {
        Self {
            id: dto.id,
            code: trimmed_code(&dto.code),
            designation: dto.designation.clone().unwrap_or_default(),
        }
    }
}
