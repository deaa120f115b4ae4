//! Entity kind policies
//!
//! Each zero-sized kind ties a record, its DTO, its validator and its error
//! codes together for `CrudService`.

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::entities::{
    Article, Category, Client, ClientOrder, ClientOrderLine, Record, Sale, SalesLine, Supplier,
    SupplierOrder, SupplierOrderLine,
};
use crate::dto::{
    ArticleDto, CategoryDto, ClientDto, ClientOrderDto, ClientOrderLineDto, SaleDto,
    SalesLineDto, SupplierDto, SupplierOrderDto, SupplierOrderLineDto,
};
use crate::error::ErrorCode;
use crate::validator;

pub trait EntityKind: Send + Sync + 'static {
    type Record: Record + for<'a> From<&'a Self::Dto>;
    type Dto: From<Self::Record>
        + Clone
        + std::fmt::Debug
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Human-readable name used in messages and logs
    const LABEL: &'static str;
    const NOT_FOUND: ErrorCode;
    const NOT_VALID: ErrorCode;
    const IN_USE: ErrorCode;
    /// Raised when a stored record, or a child of it, is changed after it froze
    const NOT_EDITABLE: ErrorCode = Self::NOT_VALID;

    fn validate(dto: Option<&Self::Dto>) -> Vec<String>;
}

/// Kinds whose records carry an order status
pub trait OrderKind: EntityKind {}

macro_rules! entity_kind {
    ($kind:ident, $record:ty, $dto:ty, $label:literal, $validate:path, $not_found:ident, $not_valid:ident, $in_use:ident $(, $not_editable:ident)?) => {
        pub struct $kind;

        impl EntityKind for $kind {
            type Record = $record;
            type Dto = $dto;

            const LABEL: &'static str = $label;
            const NOT_FOUND: ErrorCode = ErrorCode::$not_found;
            const NOT_VALID: ErrorCode = ErrorCode::$not_valid;
            const IN_USE: ErrorCode = ErrorCode::$in_use;
            $(const NOT_EDITABLE: ErrorCode = ErrorCode::$not_editable;)?

            fn validate(dto: Option<&$dto>) -> Vec<String> {
                $validate(dto)
            }
        }
    };
}

entity_kind!(
    CategoryKind,
    Category,
    CategoryDto,
    "Category",
    validator::validate_category,
    CategoryNotFound,
    CategoryNotValid,
    CategoryAlreadyInUse
);

entity_kind!(
    ArticleKind,
    Article,
    ArticleDto,
    "Article",
    validator::validate_article,
    ArticleNotFound,
    ArticleNotValid,
    ArticleAlreadyInUse
);

entity_kind!(
    ClientKind,
    Client,
    ClientDto,
    "Client",
    validator::validate_client,
    ClientNotFound,
    ClientNotValid,
    ClientAlreadyInUse
);

entity_kind!(
    SupplierKind,
    Supplier,
    SupplierDto,
    "Supplier",
    validator::validate_supplier,
    SupplierNotFound,
    SupplierNotValid,
    SupplierAlreadyInUse
);

entity_kind!(
    SaleKind,
    Sale,
    SaleDto,
    "Sale",
    validator::validate_sale,
    SaleNotFound,
    SaleNotValid,
    SaleAlreadyInUse
);

entity_kind!(
    ClientOrderKind,
    ClientOrder,
    ClientOrderDto,
    "Client order",
    validator::validate_client_order,
    ClientOrderNotFound,
    ClientOrderNotValid,
    ClientOrderAlreadyInUse,
    ClientOrderNotEditable
);

entity_kind!(
    SupplierOrderKind,
    SupplierOrder,
    SupplierOrderDto,
    "Supplier order",
    validator::validate_supplier_order,
    SupplierOrderNotFound,
    SupplierOrderNotValid,
    SupplierOrderAlreadyInUse,
    SupplierOrderNotEditable
);

entity_kind!(
    SalesLineKind,
    SalesLine,
    SalesLineDto,
    "Sales line",
    validator::validate_sales_line,
    SalesLineNotFound,
    SalesLineNotValid,
    SalesLineAlreadyInUse
);

entity_kind!(
    ClientOrderLineKind,
    ClientOrderLine,
    ClientOrderLineDto,
    "Client order line",
    validator::validate_client_order_line,
    ClientOrderLineNotFound,
    ClientOrderLineNotValid,
    ClientOrderLineAlreadyInUse
);

entity_kind!(
    SupplierOrderLineKind,
    SupplierOrderLine,
    SupplierOrderLineDto,
    "Supplier order line",
    validator::validate_supplier_order_line,
    SupplierOrderLineNotFound,
    SupplierOrderLineNotValid,
    SupplierOrderLineAlreadyInUse
);

impl OrderKind for ClientOrderKind {}

impl OrderKind for SupplierOrderKind {}
