//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain records, validators, mappers and ports.

pub mod crud_service;
pub mod kinds;

pub use crud_service::CrudService;
pub use kinds::{
    ArticleKind, CategoryKind, ClientKind, ClientOrderKind, ClientOrderLineKind, EntityKind,
    OrderKind, SaleKind, SalesLineKind, SupplierKind, SupplierOrderKind, SupplierOrderLineKind,
};
