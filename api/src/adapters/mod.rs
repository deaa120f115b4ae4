//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;

pub use postgres::{
    PostgresArticleRepository, PostgresCategoryRepository, PostgresClientOrderLineRepository,
    PostgresClientOrderRepository, PostgresClientRepository, PostgresSaleRepository,
    PostgresSalesLineRepository, PostgresSupplierOrderLineRepository,
    PostgresSupplierOrderRepository, PostgresSupplierRepository,
};
