//! Offline Order Bridge Backend
//!
//! Order-management backend bridging an offline retail intake workflow with
//! the Cafe24 admin API and an ERP-facing sync pipeline. SQLite persistence,
//! OAuth2 token lifecycle with transparent retry-on-expiry.

mod api;
mod cafe24;
mod config;
mod db;
mod errors;
mod models;
mod seed;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cafe24::{CatalogClient, TokenManager};
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub catalog: Arc<CatalogClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; missing required variables abort boot
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fatal: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Offline Order Bridge Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Platform API base: {}", config.api_base);
    tracing::info!("Bind address: {}", config.bind_addr);
    if let Some(profile) = &config.notification {
        tracing::info!(
            user_id = %profile.user_id,
            sender = %profile.sender,
            "Notification profile configured"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Populate empty reference collections from the bundled snapshots
    seed::seed_all(&repo).await?;

    // Load the token pair and wire up the catalog client
    let config = Arc::new(config);
    let initial_pair = TokenManager::load_initial(&config, &repo).await?;
    let token = Arc::new(TokenManager::new(config.clone(), repo.clone(), initial_pair));
    let catalog = Arc::new(CatalogClient::new(config.clone(), token));

    // Create application state
    let state = AppState {
        repo,
        catalog,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Catalog
        .route("/cafe24/products", get(api::search_products))
        .route("/cafe24/products/{id}/options", get(api::get_product_options))
        // Orders
        .route("/ordersOffData", post(api::create_order))
        .route("/ordersOffData", get(api::list_orders))
        .route("/ordersOffData/sync", post(api::sync_orders))
        .route("/ordersOffData/restore/{id}", put(api::restore_order))
        .route("/ordersOffData/{id}", put(api::update_order))
        .route("/ordersOffData/{id}", delete(api::delete_order))
        // Reference data
        .route("/ecount-stores", get(api::get_ecount_stores))
        .route("/ecount-stores", put(api::replace_ecount_stores))
        .route("/static-managers", get(api::get_static_managers))
        .route("/static-managers", put(api::replace_static_managers))
        .route("/ecount-warehouses", get(api::get_ecount_warehouses))
        .route("/ecount-warehouses", put(api::replace_ecount_warehouses))
        .route("/item-codes", get(api::get_item_codes))
        .route("/item-codes", put(api::replace_item_codes))
        // Manager/store mappings
        .route("/mappings", get(api::list_mappings))
        .route("/mappings", post(api::create_mapping))
        .route("/mappings/import", post(api::import_mappings))
        .route("/mappings/reseed", post(api::reseed_mappings))
        .route("/mappings/{id}", put(api::update_mapping))
        .route("/mappings/{id}", delete(api::delete_mapping))
        // Coupon mappings
        .route("/coupon-mappings", get(api::list_coupon_mappings))
        .route("/coupon-mappings", post(api::create_coupon_mapping))
        .route("/coupon-mappings/{id}", put(api::update_coupon_mapping))
        .route("/coupon-mappings/{id}", delete(api::delete_coupon_mapping));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
