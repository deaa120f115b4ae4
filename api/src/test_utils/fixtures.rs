//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid record that can be customized.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::entities::{
    Address, Article, Category, Client, ClientOrder, OrderStatus, Sale, SalesLine, Supplier,
    SupplierOrder,
};

/// Create a test category with a specific id
pub fn test_category(id: i32) -> Category {
    Category {
        id: Some(id),
        code: format!("CAT-{}", id),
        designation: format!("Category {}", id),
    }
}

/// Create a test article in a category
pub fn test_article(id: i32, code: &str, category_id: i32) -> Article {
    Article {
        id: Some(id),
        code: code.to_string(),
        designation: format!("Article {}", code),
        unit_price_excl_tax: Decimal::new(1000, 2),
        vat_rate: Decimal::new(20, 0),
        unit_price_incl_tax: Decimal::new(1200, 2),
        photo: None,
        category_id: Some(category_id),
    }
}

pub fn test_address() -> Address {
    Address {
        line1: "1 Main Street".to_string(),
        line2: None,
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
        country: "US".to_string(),
    }
}

pub fn test_client(id: i32) -> Client {
    Client {
        id: Some(id),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        address: test_address(),
        photo: None,
        email: format!("client{}@example.com", id),
        phone: "555-0100".to_string(),
    }
}

pub fn test_supplier(id: i32) -> Supplier {
    Supplier {
        id: Some(id),
        first_name: "Acme".to_string(),
        last_name: "Corp".to_string(),
        address: test_address(),
        photo: None,
        email: format!("supplier{}@example.com", id),
        phone: "555-0200".to_string(),
    }
}

pub fn test_sale(id: i32) -> Sale {
    Sale {
        id: Some(id),
        code: format!("SALE-{}", id),
        sale_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        comment: None,
    }
}

pub fn test_client_order(id: i32, client_id: i32, status: OrderStatus) -> ClientOrder {
    ClientOrder {
        id: Some(id),
        code: format!("CO-{}", id),
        order_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        status,
        client_id: Some(client_id),
    }
}

pub fn test_supplier_order(id: i32, supplier_id: i32, status: OrderStatus) -> SupplierOrder {
    SupplierOrder {
        id: Some(id),
        code: format!("SO-{}", id),
        order_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        status,
        supplier_id: Some(supplier_id),
    }
}

/// Create a sales line for `article_id` on sale `sale_id`
pub fn test_sales_line(id: i32, sale_id: i32, article_id: i32) -> SalesLine {
    SalesLine {
        id: Some(id),
        sale_id: Some(sale_id),
        article_id: Some(article_id),
        quantity: Decimal::new(2, 0),
        unit_price: Decimal::new(1200, 2),
    }
}

/// Password accepted by `test_config`
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Configuration for router tests
pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        port: 0,
        token_secret: "test-token-secret".to_string(),
        token_ttl_minutes: 60,
        admin_login: "admin".to_string(),
        admin_password_hash: crate::auth::hash_secret(TEST_PASSWORD),
        rate_limit_per_second: 100,
        rate_limit_burst: 100,
    }
}
