//! Sales line and order line validation

use rust_decimal::Decimal;

use super::{limit_value, null_object, require_non_negative, PRICE_MAX, QUANTITY_MAX};
use crate::dto::{ClientOrderLineDto, SalesLineDto, SupplierOrderLineDto};

pub fn validate_sales_line(dto: Option<&SalesLineDto>) -> Vec<String> {
    match dto {
        None => null_object("Sales line"),
        Some(dto) => validate_line(
            "Sales line",
            ("sale", dto.sale.as_ref().and_then(|s| s.id)),
            dto.article.as_ref().and_then(|a| a.id),
            dto.quantity,
            dto.unit_price,
        ),
    }
}

pub fn validate_client_order_line(dto: Option<&ClientOrderLineDto>) -> Vec<String> {
    match dto {
        None => null_object("Client order line"),
        Some(dto) => validate_line(
            "Client order line",
            ("client order", dto.client_order.as_ref().and_then(|o| o.id)),
            dto.article.as_ref().and_then(|a| a.id),
            dto.quantity,
            dto.unit_price,
        ),
    }
}

pub fn validate_supplier_order_line(dto: Option<&SupplierOrderLineDto>) -> Vec<String> {
    match dto {
        None => null_object("Supplier order line"),
        Some(dto) => validate_line(
            "Supplier order line",
            (
                "supplier order",
                dto.supplier_order.as_ref().and_then(|o| o.id),
            ),
            dto.article.as_ref().and_then(|a| a.id),
            dto.quantity,
            dto.unit_price,
        ),
    }
}

fn validate_line(
    kind: &str,
    (parent, parent_id): (&str, Option<i32>),
    article_id: Option<i32>,
    quantity: Option<Decimal>,
    unit_price: Option<Decimal>,
) -> Vec<String> {
    let mut errors = Vec::new();
    if parent_id.is_none() {
        errors.push(format!("{} {} is required", kind, parent));
    }
    if article_id.is_none() {
        errors.push(format!("{} article is required", kind));
    }
    match quantity {
        None => errors.push(format!("{} quantity is required", kind)),
        Some(q) if q <= Decimal::ZERO => {
            errors.push(format!("{} quantity must be positive", kind))
        }
        Some(_) => {}
    }
    require_non_negative(
        &mut errors,
        unit_price,
        &format!("{} unit price is required", kind),
        &format!("{} unit price must not be negative", kind),
    );
    limit_value(
        &mut errors,
        quantity,
        QUANTITY_MAX,
        &format!("{} quantity", kind),
    );
    limit_value(
        &mut errors,
        unit_price,
        PRICE_MAX,
        &format!("{} unit price", kind),
    );
    errors
}
