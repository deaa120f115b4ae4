//! Client and supplier order validation

use chrono::{DateTime, Utc};

use super::{limit_len, null_object, require_text, CODE_MAX_LEN};
use crate::dto::{ClientOrderDto, SupplierOrderDto};

pub fn validate_client_order(dto: Option<&ClientOrderDto>) -> Vec<String> {
    match dto {
        None => null_object("Client order"),
        Some(dto) => validate_order(
            "Client order",
            &dto.code,
            dto.order_date,
            dto.client.as_ref().and_then(|c| c.id),
            "Client order client is required",
        ),
    }
}

pub fn validate_supplier_order(dto: Option<&SupplierOrderDto>) -> Vec<String> {
    match dto {
        None => null_object("Supplier order"),
        Some(dto) => validate_order(
            "Supplier order",
            &dto.code,
            dto.order_date,
            dto.supplier.as_ref().and_then(|s| s.id),
            "Supplier order supplier is required",
        ),
    }
}

fn validate_order(
    kind: &str,
    code: &Option<String>,
    order_date: Option<DateTime<Utc>>,
    party_id: Option<i32>,
    missing_party: &str,
) -> Vec<String> {
    let mut errors = Vec::new();
    require_text(&mut errors, code, &format!("{} code is required", kind));
    if order_date.is_none() {
        errors.push(format!("{} date is required", kind));
    }
    if party_id.is_none() {
        errors.push(missing_party.to_string());
    }
    limit_len(&mut errors, code, CODE_MAX_LEN, &format!("{} code", kind));
    errors
}
