use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use sms_api::{create_app, AppState};
use sms_core::services::sms::SmsServiceConfig;
use sms_infra::{PrometheusExporter, ProviderGateway};
use sms_shared::config::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter())),
        )
        .init();

    tracing::info!(environment = %environment, "Starting SMS facade API server");

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let bind_address = config.server.bind_address();

    let metrics = PrometheusExporter::install()?;
    let provider = Arc::new(ProviderGateway::new(config.provider.clone())?);
    let app_state = web::Data::new(AppState::new(
        provider,
        SmsServiceConfig::from(&config.provider),
        metrics,
        config.include_error_data,
    ));

    tracing::info!(
        bind_address = %bind_address,
        default_sender = %config.provider.default_sender,
        obfuscation = %config.provider.obfuscation,
        include_error_data = config.include_error_data,
        "Server will bind"
    );

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
