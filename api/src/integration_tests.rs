//! Full integration tests for the Stockroom API
//!
//! Drives the real router (auth middleware, handlers, services) over
//! in-memory repositories.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};

    use crate::domain::entities::*;
    use crate::dto::{ArticleDto, CategoryDto, ClientOrderDto, SalesLineDto};
    use crate::handlers::auth::AuthenticationResponse;
    use crate::test_utils::{test_config, InMemoryRepository, TEST_PASSWORD};
    use crate::{app_router, AppState, Repositories};

    fn in_memory_repositories() -> Repositories {
        Repositories {
            categories: Arc::new(InMemoryRepository::<Category>::new()),
            articles: Arc::new(InMemoryRepository::<Article>::new()),
            clients: Arc::new(InMemoryRepository::<Client>::new()),
            suppliers: Arc::new(InMemoryRepository::<Supplier>::new()),
            sales: Arc::new(InMemoryRepository::<Sale>::new()),
            client_orders: Arc::new(InMemoryRepository::<ClientOrder>::new()),
            supplier_orders: Arc::new(InMemoryRepository::<SupplierOrder>::new()),
            sales_lines: Arc::new(InMemoryRepository::<SalesLine>::new()),
            client_order_lines: Arc::new(InMemoryRepository::<ClientOrderLine>::new()),
            supplier_order_lines: Arc::new(InMemoryRepository::<SupplierOrderLine>::new()),
        }
    }

    fn test_server() -> TestServer {
        let state = AppState::new(in_memory_repositories(), test_config());
        TestServer::new(app_router(state)).unwrap()
    }

    async fn login(server: &TestServer) -> String {
        let response = server
            .post("/api/auth/authenticate")
            .json(&json!({ "login": "admin", "password": TEST_PASSWORD }))
            .await;
        response.assert_status_ok();
        response.json::<AuthenticationResponse>().access_token
    }

    async fn create_category(server: &TestServer, token: &str, code: &str) -> CategoryDto {
        let response = server
            .post("/api/categories")
            .authorization_bearer(token)
            .json(&json!({ "code": code, "designation": "Hardware" }))
            .await;
        response.assert_status_ok();
        response.json::<CategoryDto>()
    }

    async fn create_article(server: &TestServer, token: &str, category_id: i32) -> ArticleDto {
        let response = server
            .post("/api/articles")
            .authorization_bearer(token)
            .json(&json!({
                "code": "A1",
                "designation": "Widget",
                "unit_price_excl_tax": "10.00",
                "vat_rate": "20",
                "category": { "id": category_id }
            }))
            .await;
        response.assert_status_ok();
        response.json::<ArticleDto>()
    }

    #[tokio::test]
    async fn health_is_public() {
        let server = test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let server = test_server();

        let response = server
            .post("/api/auth/authenticate")
            .json(&json!({ "login": "admin", "password": "wrong" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["code"], "BAD_CREDENTIALS");
    }

    #[tokio::test]
    async fn protected_routes_require_a_token() {
        let server = test_server();

        server
            .get("/api/categories")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/api/categories")
            .authorization_bearer("not-a-token")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn null_body_reports_null_object() {
        let server = test_server();
        let token = login(&server).await;

        let response = server
            .post("/api/categories")
            .authorization_bearer(&token)
            .json(&Value::Null)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["code"], "CATEGORY_NOT_VALID");
        assert_eq!(body["number"], 2001);
        assert_eq!(body["errors"], json!(["Category object is null"]));
    }

    #[tokio::test]
    async fn article_catalogue_flow() {
        let server = test_server();
        let token = login(&server).await;

        let category = create_category(&server, &token, "HW").await;
        let category_id = category.id.unwrap();
        let article = create_article(&server, &token, category_id).await;
        let article_id = article.id.unwrap();

        // Incl-tax price derived from the VAT rate
        assert_eq!(article.unit_price_incl_tax, Some(Decimal::new(1200, 2)));
        assert_eq!(article.category.and_then(|c| c.id), Some(category_id));

        let by_code = server
            .get("/api/articles/code/A1")
            .authorization_bearer(&token)
            .await;
        by_code.assert_status_ok();
        assert_eq!(by_code.json::<ArticleDto>().id, Some(article_id));

        let missing = server
            .get("/api/articles/code/NOPE")
            .authorization_bearer(&token)
            .await;
        missing.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(missing.json::<Value>()["code"], "ARTICLE_NOT_FOUND");

        let by_category = server
            .get(&format!("/api/articles/category/{}", category_id))
            .authorization_bearer(&token)
            .await;
        by_category.assert_status_ok();
        assert_eq!(by_category.json::<Vec<ArticleDto>>().len(), 1);

        // Category is now in use
        let response = server
            .delete(&format!("/api/categories/{}", category_id))
            .authorization_bearer(&token)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "CATEGORY_ALREADY_IN_USE");
    }

    #[tokio::test]
    async fn article_with_unknown_category_is_not_found() {
        let server = test_server();
        let token = login(&server).await;

        let response = server
            .post("/api/articles")
            .authorization_bearer(&token)
            .json(&json!({
                "code": "A1",
                "designation": "Widget",
                "unit_price_excl_tax": "10.00",
                "vat_rate": "20",
                "category": { "id": 42 }
            }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "CATEGORY_NOT_FOUND");
    }

    #[tokio::test]
    async fn sold_article_cannot_be_deleted() {
        let server = test_server();
        let token = login(&server).await;

        let category = create_category(&server, &token, "HW").await;
        let article = create_article(&server, &token, category.id.unwrap()).await;
        let article_id = article.id.unwrap();

        let sale = server
            .post("/api/sales")
            .authorization_bearer(&token)
            .json(&json!({ "code": "S1", "sale_date": "2024-03-01T10:00:00Z" }))
            .await;
        sale.assert_status_ok();
        let sale_id = sale.json::<Value>()["id"].as_i64().unwrap();

        server
            .post("/api/sales-lines")
            .authorization_bearer(&token)
            .json(&json!({
                "sale": { "id": sale_id },
                "article": { "id": article_id },
                "quantity": "2",
                "unit_price": "12.00"
            }))
            .await
            .assert_status_ok();

        let response = server
            .delete(&format!("/api/articles/{}", article_id))
            .authorization_bearer(&token)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "ARTICLE_ALREADY_IN_USE");

        // Still there
        server
            .get(&format!("/api/articles/{}", article_id))
            .authorization_bearer(&token)
            .await
            .assert_status_ok();

        let history = server
            .get(&format!("/api/articles/{}/sales-history", article_id))
            .authorization_bearer(&token)
            .await;
        history.assert_status_ok();
        let lines = history.json::<Vec<SalesLineDto>>();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, Some(Decimal::new(2, 0)));

        let sale_lines = server
            .get(&format!("/api/sales/{}/lines", sale_id))
            .authorization_bearer(&token)
            .await;
        sale_lines.assert_status_ok();
        assert_eq!(sale_lines.json::<Vec<SalesLineDto>>().len(), 1);
    }

    #[tokio::test]
    async fn unused_category_is_deleted() {
        let server = test_server();
        let token = login(&server).await;
        let category = create_category(&server, &token, "HW").await;
        let path = format!("/api/categories/{}", category.id.unwrap());

        server
            .delete(&path)
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&path).authorization_bearer(&token).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "CATEGORY_NOT_FOUND");
    }

    #[tokio::test]
    async fn delivered_order_is_frozen() {
        let server = test_server();
        let token = login(&server).await;

        let client = server
            .post("/api/clients")
            .authorization_bearer(&token)
            .json(&json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "address": {
                    "line1": "12 Analytical Row",
                    "city": "London",
                    "postal_code": "N1",
                    "country": "UK"
                },
                "email": "ada@example.com",
                "phone": "+44 20 0000"
            }))
            .await;
        client.assert_status_ok();
        let client_id = client.json::<Value>()["id"].as_i64().unwrap();

        let order = server
            .post("/api/client-orders")
            .authorization_bearer(&token)
            .json(&json!({
                "code": "CO-1",
                "order_date": "2024-03-01T10:00:00Z",
                "client": { "id": client_id }
            }))
            .await;
        order.assert_status_ok();
        let order = order.json::<ClientOrderDto>();
        assert_eq!(order.status, Some(OrderStatus::InPreparation));
        let status_path = format!("/api/client-orders/{}/status", order.id.unwrap());

        let delivered = server
            .patch(&status_path)
            .authorization_bearer(&token)
            .json(&json!({ "status": "delivered" }))
            .await;
        delivered.assert_status_ok();
        assert_eq!(
            delivered.json::<ClientOrderDto>().status,
            Some(OrderStatus::Delivered)
        );

        let response = server
            .patch(&status_path)
            .authorization_bearer(&token)
            .json(&json!({ "status": "validated" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "CLIENT_ORDER_NOT_EDITABLE");

        let rewrite = server
            .post("/api/client-orders")
            .authorization_bearer(&token)
            .json(&json!({
                "id": order.id,
                "code": "CO-REWRITTEN",
                "order_date": "2024-03-01T10:00:00Z",
                "status": "in_preparation",
                "client": { "id": client_id }
            }))
            .await;
        rewrite.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(rewrite.json::<Value>()["code"], "CLIENT_ORDER_NOT_EDITABLE");

        let category = create_category(&server, &token, "HW").await;
        let article = create_article(&server, &token, category.id.unwrap()).await;
        let line = server
            .post("/api/client-order-lines")
            .authorization_bearer(&token)
            .json(&json!({
                "client_order": { "id": order.id },
                "article": { "id": article.id },
                "quantity": "1",
                "unit_price": "12.00"
            }))
            .await;
        line.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(line.json::<Value>()["code"], "CLIENT_ORDER_NOT_EDITABLE");

        let by_client = server
            .get(&format!("/api/client-orders/client/{}", client_id))
            .authorization_bearer(&token)
            .await;
        by_client.assert_status_ok();
        assert_eq!(by_client.json::<Vec<ClientOrderDto>>().len(), 1);
    }

    #[tokio::test]
    async fn column_overflow_is_an_invalid_entity() {
        let server = test_server();
        let token = login(&server).await;

        let response = server
            .post("/api/categories")
            .authorization_bearer(&token)
            .json(&json!({ "code": "C".repeat(80), "designation": "D".repeat(300) }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["code"], "CATEGORY_NOT_VALID");
        assert_eq!(
            body["errors"],
            json!([
                "Category code must not exceed 64 characters",
                "Category designation must not exceed 255 characters"
            ])
        );
    }

    #[tokio::test]
    async fn malformed_id_gets_a_json_error() {
        let server = test_server();
        let token = login(&server).await;

        let response = server
            .get("/api/articles/abc")
            .authorization_bearer(&token)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "Bad request");
    }
}
