use rust_decimal::Decimal;

use super::{
    limit_len, limit_value, null_object, require_non_negative, require_text, CODE_MAX_LEN,
    DESIGNATION_MAX_LEN, PHOTO_MAX_LEN, PRICE_MAX, RATE_MAX,
};
use crate::domain::entities::price_incl_tax;
use crate::dto::ArticleDto;

pub fn validate_article(dto: Option<&ArticleDto>) -> Vec<String> {
    let Some(dto) = dto else {
        return null_object("Article");
    };

    let mut errors = Vec::new();
    require_text(&mut errors, &dto.code, "Article code is required");
    require_text(
        &mut errors,
        &dto.designation,
        "Article designation is required",
    );
    require_non_negative(
        &mut errors,
        dto.unit_price_excl_tax,
        "Article unit price excluding tax is required",
        "Article unit price excluding tax must not be negative",
    );
    require_non_negative(
        &mut errors,
        dto.vat_rate,
        "Article VAT rate is required",
        "Article VAT rate must not be negative",
    );
    if let Some(price) = dto.unit_price_incl_tax {
        if price < Decimal::ZERO {
            errors.push("Article unit price including tax must not be negative".to_string());
        }
    }
    limit_len(&mut errors, &dto.code, CODE_MAX_LEN, "Article code");
    limit_len(
        &mut errors,
        &dto.designation,
        DESIGNATION_MAX_LEN,
        "Article designation",
    );
    limit_len(&mut errors, &dto.photo, PHOTO_MAX_LEN, "Article photo");
    limit_value(
        &mut errors,
        dto.unit_price_excl_tax,
        PRICE_MAX,
        "Article unit price excluding tax",
    );
    limit_value(&mut errors, dto.vat_rate, RATE_MAX, "Article VAT rate");
    match (dto.unit_price_incl_tax, dto.unit_price_excl_tax, dto.vat_rate) {
        (Some(price), _, _) => limit_value(
            &mut errors,
            Some(price),
            PRICE_MAX,
            "Article unit price including tax",
        ),
        (None, Some(excl), Some(rate)) => {
            if price_incl_tax(excl, rate).map_or(true, |price| price > PRICE_MAX) {
                errors.push("Article unit price including tax is out of range".to_string());
            }
        }
        _ => {}
    }
    if dto.category.as_ref().and_then(|c| c.id).is_none() {
        errors.push("Article category is required".to_string());
    }
    errors
}
