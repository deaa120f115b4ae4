//! DTO validators
//!
//! Pure functions mapping a DTO to the list of violated rules. An empty list
//! means the DTO is valid. Every rule is checked, so one failure never hides
//! another.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

pub mod article;
pub mod category;
pub mod contact;
pub mod line;
pub mod order;
pub mod sale;

pub use article::validate_article;
pub use category::validate_category;
pub use contact::{validate_client, validate_supplier};
pub use line::{validate_client_order_line, validate_sales_line, validate_supplier_order_line};
pub use order::{validate_client_order, validate_supplier_order};
pub use sale::validate_sale;

// Column bounds from `migrations/0001_init.sql`
pub(crate) const CODE_MAX_LEN: usize = 64;
pub(crate) const DESIGNATION_MAX_LEN: usize = 255;
pub(crate) const NAME_MAX_LEN: usize = 128;
pub(crate) const ADDRESS_LINE_MAX_LEN: usize = 255;
pub(crate) const POSTAL_CODE_MAX_LEN: usize = 32;
pub(crate) const PHOTO_MAX_LEN: usize = 512;
pub(crate) const EMAIL_MAX_LEN: usize = 255;
pub(crate) const PHONE_MAX_LEN: usize = 64;

/// Largest `NUMERIC(12, 2)` value
pub(crate) const PRICE_MAX: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);
/// Largest `NUMERIC(12, 3)` value
pub(crate) const QUANTITY_MAX: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 3);
/// Largest `NUMERIC(5, 2)` value
pub(crate) const RATE_MAX: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);

/// Message returned when the DTO itself is absent
pub(crate) fn null_object(kind: &str) -> Vec<String> {
    vec![format!("{} object is null", kind)]
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

pub(crate) fn require_text(errors: &mut Vec<String>, value: &Option<String>, message: &str) {
    if is_blank(value) {
        errors.push(message.to_string());
    }
}

/// Length is counted in characters, as `VARCHAR(n)` does
pub(crate) fn limit_len(
    errors: &mut Vec<String>,
    value: &Option<String>,
    max: usize,
    field: &str,
) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.push(format!("{} must not exceed {} characters", field, max));
        }
    }
}

pub(crate) fn limit_value(
    errors: &mut Vec<String>,
    value: Option<Decimal>,
    max: Decimal,
    field: &str,
) {
    if let Some(value) = value {
        if value > max {
            errors.push(format!("{} must not exceed {}", field, max));
        }
    }
}

pub(crate) fn require_non_negative(
    errors: &mut Vec<String>,
    value: Option<Decimal>,
    missing: &str,
    negative: &str,
) {
    match value {
        None => errors.push(missing.to_string()),
        Some(v) if v < Decimal::ZERO => errors.push(negative.to_string()),
        Some(_) => {}
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
                .expect("email pattern is valid")
        })
        .is_match(email)
}
