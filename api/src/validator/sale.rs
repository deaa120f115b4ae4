use super::{limit_len, null_object, require_text, CODE_MAX_LEN};
use crate::dto::SaleDto;

pub fn validate_sale(dto: Option<&SaleDto>) -> Vec<String> {
    let Some(dto) = dto else {
        return null_object("Sale");
    };

    let mut errors = Vec::new();
    require_text(&mut errors, &dto.code, "Sale code is required");
    if dto.sale_date.is_none() {
        errors.push("Sale date is required".to_string());
    }
    limit_len(&mut errors, &dto.code, CODE_MAX_LEN, "Sale code");
    errors
}
