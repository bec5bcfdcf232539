use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixgate::config::{database, Config};
use pixgate::middleware::BearerAuth;
use pixgate::modules::payments::services::PaymentDispatcher;
use pixgate::modules::providers::repositories::ProviderRepository;
use pixgate::modules::providers::services::{ProviderRegistry, SystemClock};
use pixgate::modules::users::repositories::UserRepository;
use pixgate::modules::{payments, providers, users};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixgate=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting pixgate PIX gateway service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool and bootstrap the schema
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");
    database::ensure_schema(&db_pool)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Wire repositories, the adapter registry, and the dispatcher
    let user_repo = UserRepository::new(db_pool.clone());
    let provider_repo = ProviderRepository::new(db_pool.clone());
    let registry = Arc::new(ProviderRegistry::new(&config.endpoints));
    let dispatcher = Arc::new(
        PaymentDispatcher::new(
            provider_repo.clone(),
            registry,
            &config.outbound,
            Arc::new(SystemClock),
        )
        .expect("Failed to build payment dispatcher"),
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(BearerAuth::new(db_pool.clone()))
            .wrap(Cors::permissive())
            .app_data(web::Data::new(user_repo.clone()))
            .app_data(web::Data::new(provider_repo.clone()))
            .app_data(web::Data::new(dispatcher.clone()))
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .configure(users::controllers::configure)
            .configure(providers::controllers::configure)
            .configure(payments::controllers::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "pixgate"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "pixgate PIX gateway",
        "version": "0.1.0",
        "status": "running"
    }))
}
