use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::{AppConfig, Environment};
use crate::database::models::{Category, Expense};
use crate::database::{DatabaseError, DatabaseManager, MemoryStore, PgDocumentStore};
use crate::handlers::{categories, expenses, system};
use crate::services::{CategoryService, ExpenseService};

/// Shared handler state: the two services and nothing else
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub expenses: ExpenseService,
}

impl AppState {
    pub fn new(categories: CategoryService, expenses: ExpenseService) -> Self {
        Self { categories, expenses }
    }

    /// Wire services to PostgreSQL when a database URL is configured,
    /// otherwise to in-memory collections.
    pub async fn from_config(config: &AppConfig) -> Result<Self, DatabaseError> {
        match config.database.url.as_deref() {
            Some(url) => {
                let pool = DatabaseManager::connect(url, &config.database).await?;
                let categories = PgDocumentStore::<Category>::new(pool.clone()).await?;
                let expenses = PgDocumentStore::<Expense>::new(pool).await?;
                Ok(Self::new(
                    CategoryService::new(Arc::new(categories)),
                    ExpenseService::new(Arc::new(expenses)),
                ))
            }
            None => {
                info!("No DATABASE_URL configured; using in-memory record store");
                Ok(Self::new(
                    CategoryService::new(Arc::new(MemoryStore::<Category>::new())),
                    ExpenseService::new(Arc::new(MemoryStore::<Expense>::new())),
                ))
            }
        }
    }
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:id",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route("/expenses/categories", get(expenses::distinct_categories))
        .route("/expenses/category/:category", get(expenses::by_category))
        .route(
            "/expenses/:id",
            get(expenses::get)
                .put(expenses::update)
                .delete(expenses::delete),
        )
}

/// Full application router. Resource routes are served at the root and
/// mirrored under `/api`.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(resource_routes())
        .nest("/api", resource_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(config));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serve `app` on an already-bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    info!("Expense tracker listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Build state from `config`, bind the configured address and serve
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(config)
        .await
        .context("failed to initialize record store")?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    serve(listener, app(state, config)).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
