use super::{limit_len, null_object, require_text, CODE_MAX_LEN, DESIGNATION_MAX_LEN};
use crate::dto::CategoryDto;

pub fn validate_category(dto: Option<&CategoryDto>) -> Vec<String> {
    let Some(dto) = dto else {
        return null_object("Category");
    };

    let mut errors = Vec::new();
    require_text(&mut errors, &dto.code, "Category code is required");
    require_text(
        &mut errors,
        &dto.designation,
        "Category designation is required",
    );
    limit_len(&mut errors, &dto.code, CODE_MAX_LEN, "Category code");
    limit_len(
        &mut errors,
        &dto.designation,
        DESIGNATION_MAX_LEN,
        "Category designation",
    );
    errors
}
