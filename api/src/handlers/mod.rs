//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod articles;
pub mod auth;
pub mod crud;
pub mod extract;
pub mod orders;
pub mod sales;

pub use articles::{client_order_history, find_by_category, sales_history, supplier_order_history};
pub use auth::authenticate;
pub use orders::{
    client_order_lines, find_client_orders_by_client, find_supplier_orders_by_supplier,
    supplier_order_lines, update_client_order_status, update_supplier_order_status,
};
pub use sales::sale_lines;
