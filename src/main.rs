use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shaho::config::Config;
use shaho::core::error;
use shaho::modules::admin::controllers::migration_check_controller;
use shaho::modules::employment::repositories::{
    EmploymentInsuranceRateRepository, PgEmploymentInsuranceRateRepository,
};
use shaho::modules::health::controllers::health_controller;
use shaho::modules::premiums::controllers::premium_bracket_controller;
use shaho::modules::premiums::repositories::{PgPremiumBracketRepository, PremiumBracketRepository};
use shaho::modules::premiums::services::PremiumBracketService;
use shaho::modules::quotes::controllers::quote_controller;
use shaho::modules::quotes::services::SocialInsuranceQueryService;
use shaho::modules::withholding::repositories::{
    PgWithholdingTaxBracketRepository, WithholdingTaxBracketRepository,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "shaho={},actix_web=info",
                    config.app.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shaho Social Insurance Quote Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Apply embedded migrations so the reference tables are in place
    sqlx::migrate!()
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    // Repositories are shared as trait objects so the admin checks can
    // count rows through the same handles the services use
    let bracket_repo: Arc<dyn PremiumBracketRepository> =
        Arc::new(PgPremiumBracketRepository::new(db_pool.clone()));
    let withholding_repo: Arc<dyn WithholdingTaxBracketRepository> =
        Arc::new(PgWithholdingTaxBracketRepository::new(db_pool.clone()));
    let rate_repo: Arc<dyn EmploymentInsuranceRateRepository> =
        Arc::new(PgEmploymentInsuranceRateRepository::new(db_pool.clone()));

    let quote_service = Arc::new(SocialInsuranceQueryService::new(
        bracket_repo.clone(),
        withholding_repo.clone(),
        rate_repo.clone(),
    ));
    let bracket_service = Arc::new(PremiumBracketService::new(bracket_repo.clone()));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(error::query_config())
            .app_data(error::json_config())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(quote_service.clone()))
            .app_data(web::Data::new(bracket_service.clone()))
            .app_data(web::Data::new(bracket_repo.clone()))
            .app_data(web::Data::new(withholding_repo.clone()))
            .app_data(web::Data::new(rate_repo.clone()))
            .configure(quote_controller::configure)
            .configure(premium_bracket_controller::configure)
            .configure(migration_check_controller::configure)
            .configure(health_controller::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
