//! Application state and factory
//!
//! This module holds the shared services and builds the actix-web
//! application with its middleware and routes.

use actix_web::{web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use sms_core::errors::DomainError;
use sms_core::services::scheduled::ScheduledMessageService;
use sms_core::services::sms::{SmsProvider, SmsService, SmsServiceConfig};
use sms_infra::PrometheusExporter;
use sms_shared::errors::{error_codes, ErrorResponse};
use sms_shared::types::HealthResponse;

use crate::handlers::ApiError;
use crate::middleware::RequestContext;
use crate::routes::{metrics, scheduled, sms};

/// Application state that holds shared services
pub struct AppState<P: SmsProvider> {
    pub sms_service: SmsService<P>,
    pub scheduled_service: ScheduledMessageService<P>,
    pub metrics: PrometheusExporter,
    /// Relay provider error bodies to callers
    pub include_error_data: bool,
}

impl<P: SmsProvider> AppState<P> {
    pub fn new(
        provider: Arc<P>,
        sms_config: SmsServiceConfig,
        metrics: PrometheusExporter,
        include_error_data: bool,
    ) -> Self {
        Self {
            sms_service: SmsService::new(provider.clone(), sms_config),
            scheduled_service: ScheduledMessageService::new(provider),
            metrics,
            include_error_data,
        }
    }

    pub fn api_error(&self, error: DomainError) -> ApiError {
        ApiError::new(error, self.include_error_data)
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: SmsProvider + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(RequestContext)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/sendSms", web::post().to(sms::send_sms::<P>))
                .service(
                    web::resource("/scheduled/messages")
                        .route(web::get().to(scheduled::list_scheduled_messages::<P>))
                        .route(web::delete().to(scheduled::delete_scheduled_messages::<P>)),
                )
                .route(
                    "/scheduled/messages/{messageId}",
                    web::get().to(scheduled::get_scheduled_message::<P>),
                )
                .route("/metrics", web::get().to(metrics::metrics::<P>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "sms-facade-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND))
}
