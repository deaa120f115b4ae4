//! Stockroom API Server
//!
//! CRUD backend for a small stock management system: catalogue, parties,
//! orders and counter sales.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod dto;
mod entity;
mod error;
mod handlers;
mod validator;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{
    PostgresArticleRepository, PostgresCategoryRepository, PostgresClientOrderLineRepository,
    PostgresClientOrderRepository, PostgresClientRepository, PostgresSaleRepository,
    PostgresSalesLineRepository, PostgresSupplierOrderLineRepository,
    PostgresSupplierOrderRepository, PostgresSupplierRepository,
};
use app::{
    ArticleKind, CategoryKind, ClientKind, ClientOrderKind, ClientOrderLineKind, CrudService,
    SaleKind, SalesLineKind, SupplierKind, SupplierOrderKind, SupplierOrderLineKind,
};
use config::Config;
use domain::entities::{
    Article, ArticleRelation, Category, Client, ClientOrder, ClientOrderLine,
    ClientOrderLineRelation, ClientOrderRelation, Sale, SalesLine, SalesLineRelation, Supplier,
    SupplierOrder, SupplierOrderLine, SupplierOrderLineRelation, SupplierOrderRelation,
};
use domain::ports::Repository;

/// One repository per record type
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn Repository<Category>>,
    pub articles: Arc<dyn Repository<Article>>,
    pub clients: Arc<dyn Repository<Client>>,
    pub suppliers: Arc<dyn Repository<Supplier>>,
    pub sales: Arc<dyn Repository<Sale>>,
    pub client_orders: Arc<dyn Repository<ClientOrder>>,
    pub supplier_orders: Arc<dyn Repository<SupplierOrder>>,
    pub sales_lines: Arc<dyn Repository<SalesLine>>,
    pub client_order_lines: Arc<dyn Repository<ClientOrderLine>>,
    pub supplier_order_lines: Arc<dyn Repository<SupplierOrderLine>>,
}

impl Repositories {
    pub fn postgres(db: DatabaseConnection) -> Self {
        Self {
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            articles: Arc::new(PostgresArticleRepository::new(db.clone())),
            clients: Arc::new(PostgresClientRepository::new(db.clone())),
            suppliers: Arc::new(PostgresSupplierRepository::new(db.clone())),
            sales: Arc::new(PostgresSaleRepository::new(db.clone())),
            client_orders: Arc::new(PostgresClientOrderRepository::new(db.clone())),
            supplier_orders: Arc::new(PostgresSupplierOrderRepository::new(db.clone())),
            sales_lines: Arc::new(PostgresSalesLineRepository::new(db.clone())),
            client_order_lines: Arc::new(PostgresClientOrderLineRepository::new(db.clone())),
            supplier_order_lines: Arc::new(PostgresSupplierOrderLineRepository::new(db)),
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CrudService<CategoryKind>>,
    pub articles: Arc<CrudService<ArticleKind>>,
    pub clients: Arc<CrudService<ClientKind>>,
    pub suppliers: Arc<CrudService<SupplierKind>>,
    pub sales: Arc<CrudService<SaleKind>>,
    pub client_orders: Arc<CrudService<ClientOrderKind>>,
    pub supplier_orders: Arc<CrudService<SupplierOrderKind>>,
    pub sales_lines: Arc<CrudService<SalesLineKind>>,
    pub client_order_lines: Arc<CrudService<ClientOrderLineKind>>,
    pub supplier_order_lines: Arc<CrudService<SupplierOrderLineKind>>,
    pub config: Config,
}

impl AppState {
    /// Build every service with its reference checks and delete guards
    pub fn new(repos: Repositories, config: Config) -> Self {
        let categories = CrudService::<CategoryKind>::new(repos.categories.clone())
            .guarded_by::<Article>("articles", repos.articles.clone(), ArticleRelation::Category);

        // Guard order decides which dependents are reported first
        let articles = CrudService::<ArticleKind>::new(repos.articles.clone())
            .references::<Category>(ArticleRelation::Category, repos.categories.clone())
            .guarded_by::<ClientOrderLine>(
                "client order lines",
                repos.client_order_lines.clone(),
                ClientOrderLineRelation::Article,
            )
            .guarded_by::<SupplierOrderLine>(
                "supplier order lines",
                repos.supplier_order_lines.clone(),
                SupplierOrderLineRelation::Article,
            )
            .guarded_by::<SalesLine>(
                "sales lines",
                repos.sales_lines.clone(),
                SalesLineRelation::Article,
            );

        let clients = CrudService::<ClientKind>::new(repos.clients.clone()).guarded_by::<ClientOrder>(
            "client orders",
            repos.client_orders.clone(),
            ClientOrderRelation::Client,
        );

        let suppliers = CrudService::<SupplierKind>::new(repos.suppliers.clone())
            .guarded_by::<SupplierOrder>(
                "supplier orders",
                repos.supplier_orders.clone(),
                SupplierOrderRelation::Supplier,
            );

        let sales = CrudService::<SaleKind>::new(repos.sales.clone()).guarded_by::<SalesLine>(
            "sales lines",
            repos.sales_lines.clone(),
            SalesLineRelation::Sale,
        );

        let client_orders = CrudService::<ClientOrderKind>::new(repos.client_orders.clone())
            .references::<Client>(ClientOrderRelation::Client, repos.clients.clone())
            .guarded_by::<ClientOrderLine>(
                "client order lines",
                repos.client_order_lines.clone(),
                ClientOrderLineRelation::ClientOrder,
            );

        let supplier_orders = CrudService::<SupplierOrderKind>::new(repos.supplier_orders.clone())
            .references::<Supplier>(SupplierOrderRelation::Supplier, repos.suppliers.clone())
            .guarded_by::<SupplierOrderLine>(
                "supplier order lines",
                repos.supplier_order_lines.clone(),
                SupplierOrderLineRelation::SupplierOrder,
            );

        let sales_lines = CrudService::<SalesLineKind>::new(repos.sales_lines.clone())
            .references::<Sale>(SalesLineRelation::Sale, repos.sales.clone())
            .references::<Article>(SalesLineRelation::Article, repos.articles.clone());

        let client_order_lines =
            CrudService::<ClientOrderLineKind>::new(repos.client_order_lines.clone())
                .part_of::<ClientOrderKind>(
                    ClientOrderLineRelation::ClientOrder,
                    repos.client_orders.clone(),
                )
                .references::<Article>(ClientOrderLineRelation::Article, repos.articles.clone());

        let supplier_order_lines =
            CrudService::<SupplierOrderLineKind>::new(repos.supplier_order_lines.clone())
                .part_of::<SupplierOrderKind>(
                    SupplierOrderLineRelation::SupplierOrder,
                    repos.supplier_orders.clone(),
                )
                .references::<Article>(SupplierOrderLineRelation::Article, repos.articles.clone());

        Self {
            categories: Arc::new(categories),
            articles: Arc::new(articles),
            clients: Arc::new(clients),
            suppliers: Arc::new(suppliers),
            sales: Arc::new(sales),
            client_orders: Arc::new(client_orders),
            supplier_orders: Arc::new(supplier_orders),
            sales_lines: Arc::new(sales_lines),
            client_order_lines: Arc::new(client_order_lines),
            supplier_order_lines: Arc::new(supplier_order_lines),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router (without rate limiting)
pub fn app_router(state: AppState) -> Router {
    use handlers::crud;

    // Protected routes
    let api = Router::new()
        .nest("/categories", crud::routes(state.categories.clone()))
        .nest("/articles", crud::routes(state.articles.clone()))
        .nest("/clients", crud::routes(state.clients.clone()))
        .nest("/suppliers", crud::routes(state.suppliers.clone()))
        .nest("/sales", crud::routes(state.sales.clone()))
        .nest("/client-orders", crud::routes(state.client_orders.clone()))
        .nest("/supplier-orders", crud::routes(state.supplier_orders.clone()))
        .nest("/sales-lines", crud::routes(state.sales_lines.clone()))
        .nest(
            "/client-order-lines",
            crud::routes(state.client_order_lines.clone()),
        )
        .nest(
            "/supplier-order-lines",
            crud::routes(state.supplier_order_lines.clone()),
        )
        // Article lookups
        .route("/articles/category/:id", get(handlers::find_by_category))
        .route("/articles/:id/sales-history", get(handlers::sales_history))
        .route(
            "/articles/:id/client-order-history",
            get(handlers::client_order_history),
        )
        .route(
            "/articles/:id/supplier-order-history",
            get(handlers::supplier_order_history),
        )
        // Orders
        .route(
            "/client-orders/client/:id",
            get(handlers::find_client_orders_by_client),
        )
        .route(
            "/client-orders/:id/status",
            patch(handlers::update_client_order_status),
        )
        .route("/client-orders/:id/lines", get(handlers::client_order_lines))
        .route(
            "/supplier-orders/supplier/:id",
            get(handlers::find_supplier_orders_by_supplier),
        )
        .route(
            "/supplier-orders/:id/status",
            patch(handlers::update_supplier_order_status),
        )
        .route(
            "/supplier-orders/:id/lines",
            get(handlers::supplier_order_lines),
        )
        // Sales
        .route("/sales/:id/lines", get(handlers::sale_lines))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .route("/api/auth/authenticate", post(handlers::authenticate))
        .nest("/api", api)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stockroom_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stockroom API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    let state = AppState::new(Repositories::postgres(db), config.clone());

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?,
    );

    let app = app_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
