//! SeaORM entities
//!
//! Table models for the PostgreSQL schema in `migrations/`. Domain records
//! live in `domain::entities`; conversions are in `adapters::postgres`.

pub mod articles;
pub mod categories;
pub mod client_order_lines;
pub mod client_orders;
pub mod clients;
pub mod sales;
pub mod sales_lines;
pub mod supplier_order_lines;
pub mod supplier_orders;
pub mod suppliers;
