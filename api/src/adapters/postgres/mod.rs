//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod article_repo;
pub mod category_repo;
pub mod client_order_line_repo;
pub mod client_order_repo;
pub mod client_repo;
pub mod repository;
pub mod sale_repo;
pub mod sales_line_repo;
pub mod supplier_order_line_repo;
pub mod supplier_order_repo;
pub mod supplier_repo;


pub use article_repo::PostgresArticleRepository;
pub use category_repo::PostgresCategoryRepository;
pub use client_order_line_repo::PostgresClientOrderLineRepository;
pub use client_order_repo::PostgresClientOrderRepository;
pub use client_repo::PostgresClientRepository;
pub use repository::{PostgresRepository, SeaOrmRecord};
pub use sale_repo::PostgresSaleRepository;
pub use sales_line_repo::PostgresSalesLineRepository;
pub use supplier_order_line_repo::PostgresSupplierOrderLineRepository;
pub use supplier_order_repo::PostgresSupplierOrderRepository;
pub use supplier_repo::PostgresSupplierRepository;
